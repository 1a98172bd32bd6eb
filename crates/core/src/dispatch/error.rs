//! Error types for agent resolution, loading, and pipeline execution.

use crate::config::error::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the dispatcher and pipeline engine.
///
/// These propagate to callers; they are the "fatal to this command" class,
/// as opposed to per-invocation agent errors which are logged and swallowed
/// inside `run_agent`.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The requested name is absent from the registry.
    #[error("agent '{0}' not found")]
    AgentNotFound(String),

    /// No compiled implementation is registered for the descriptor's kind.
    #[error("no implementation registered for kind '{0}'")]
    ImplementationLoad(String),

    /// Registry or configuration files could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A pipeline step failed while the abort policy was in effect.
    #[error("pipeline step {index} (agent '{agent}') failed")]
    StepFailed { index: usize, agent: String },

    /// Generated documentation could not be written.
    #[error("failed to write documentation to {path}: {source}")]
    DocWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
