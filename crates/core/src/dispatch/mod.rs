//! The dispatcher: constructs, runs, and logs agent invocations.

pub mod error;

pub use error::DispatchError;

use crate::agents::base::Agent;
use crate::agents::factory::AgentFactory;
use crate::agents::registry::AgentRegistry;
use crate::config::error::ConfigError;
use crate::logging::{LogSink, Logger};
use ad_protocol::log_models::{LogEvent, LogLevel};
use ad_protocol::JsonMap;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

/// Owns the registry, the factory table, and the log sink for the process
/// lifetime, and drives individual agent invocations.
pub struct Dispatcher {
    registry: AgentRegistry,
    factory: AgentFactory,
    sink: Arc<dyn LogSink>,
}

impl Dispatcher {
    pub fn new(registry: AgentRegistry, factory: AgentFactory, sink: Arc<dyn LogSink>) -> Self {
        Self {
            registry,
            factory,
            sink,
        }
    }

    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    /// Append one timestamped event to the log sink.
    pub fn log(&self, level: LogLevel, actor: &str, message: impl Into<String>) {
        self.sink.emit(LogEvent::new(level, actor, message));
    }

    /// Resolve a name and construct a fresh agent instance.
    ///
    /// Instances are built per invocation, never cached. The agent receives
    /// its sidecar configuration and a [`Logger`] bound to its name, so it
    /// can emit events without owning the transport.
    pub fn load_agent(&self, name: &str) -> Result<Box<dyn Agent>, DispatchError> {
        let descriptor = self.registry.resolve(name)?;
        let logger = Logger::new(Arc::clone(&self.sink), name);
        self.factory
            .create(&descriptor.kind, descriptor.config.clone(), logger)
    }

    /// Run one agent invocation to completion.
    ///
    /// Emits `starting agent`, invokes `process`, and emits `finished`
    /// unconditionally once the invocation settles. A `process` error is
    /// logged at `ERROR` and converted into `None` — it does not propagate.
    /// Resolution and load errors do propagate, before any event is
    /// emitted.
    pub async fn run_agent(
        &self,
        name: &str,
        input: JsonMap,
    ) -> Result<Option<Value>, DispatchError> {
        let agent = self.load_agent(name)?;

        self.log(LogLevel::Info, name, "starting agent");
        let output = match agent.process(&input).await {
            Ok(value) => Some(value),
            Err(source) => {
                self.log(LogLevel::Error, name, source.to_string());
                None
            }
        };
        self.log(LogLevel::Info, name, "finished");

        Ok(output)
    }

    /// Read an agent's `README.md`, if it has one.
    pub fn agent_doc(&self, name: &str) -> Result<Option<String>, DispatchError> {
        let descriptor = self.registry.resolve(name)?;
        let readme = descriptor.dir.join("README.md");

        if !readme.is_file() {
            return Ok(None);
        }

        let text = std::fs::read_to_string(&readme).map_err(|source| ConfigError::FileRead {
            path: readme,
            source,
        })?;
        Ok(Some(text))
    }

    /// Concatenate every documented agent's `README.md` into one Markdown
    /// file, sorted by agent name. Undocumented agents are skipped.
    pub fn generate_docs(&self, out: &Path) -> Result<(), DispatchError> {
        let mut doc = String::new();
        for name in self.registry.list() {
            if let Some(text) = self.agent_doc(&name)? {
                doc.push_str(&format!("# {}\n\n", name));
                doc.push_str(&text);
                doc.push_str("\n\n");
            }
        }

        std::fs::write(out, doc).map_err(|source| DispatchError::DocWrite {
            path: out.to_path_buf(),
            source,
        })
    }
}
