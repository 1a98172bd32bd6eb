//! Test fixtures: on-disk projects and dispatchers with a capture sink.

use crate::common::mock_agents;
use ad_core::agents::{AgentFactory, AgentRegistry};
use ad_core::dispatch::Dispatcher;
use ad_core::logging::{LogSink, MemorySink};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// A temporary project directory with an `agents/` registry.
///
/// The TempDir must be kept alive for the test duration.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add an agent directory with the given `agent.yaml` contents.
    pub fn add_agent(&self, name: &str, manifest: &str) -> &Self {
        let dir = self.path().join("agents").join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create agent dir");
        std::fs::write(dir.join("agent.yaml"), manifest).expect("Failed to write manifest");
        self
    }

    /// Add a sidecar config file (`config.yaml` or `config.json`) to an
    /// existing agent directory.
    pub fn add_config(&self, name: &str, file_name: &str, content: &str) -> &Self {
        let path = self.path().join("agents").join(name).join(file_name);
        std::fs::write(path, content).expect("Failed to write sidecar config");
        self
    }

    /// Add a `README.md` to an existing agent directory.
    pub fn add_readme(&self, name: &str, content: &str) -> &Self {
        let path = self.path().join("agents").join(name).join("README.md");
        std::fs::write(path, content).expect("Failed to write README");
        self
    }

    /// Write a pipeline file at the project root and return its path.
    pub fn write_pipeline(&self, file_name: &str, content: &str) -> PathBuf {
        let path = self.path().join(file_name);
        std::fs::write(&path, content).expect("Failed to write pipeline");
        path
    }
}

/// Build a dispatcher over the project with a memory sink for event
/// assertions. The factory carries the builtins plus the mock test kinds.
pub fn dispatcher_for(project: &TestProject) -> (Dispatcher, Arc<MemorySink>) {
    let registry = AgentRegistry::discover(project.path()).expect("Failed to discover agents");
    let mut factory = AgentFactory::with_builtins();
    mock_agents::register(&mut factory);

    let sink = Arc::new(MemorySink::new());
    let dispatcher = Dispatcher::new(registry, factory, Arc::clone(&sink) as Arc<dyn LogSink>);
    (dispatcher, sink)
}
