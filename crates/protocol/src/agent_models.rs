//! Agent manifest and descriptor models.
//!
//! Agents are discovered on disk: every immediate subdirectory of the
//! project's `agents/` directory that contains an `agent.yaml` entry point
//! is an agent named after the subdirectory.

use crate::JsonMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The parsed `agents/<name>/agent.yaml` entry point file.
///
/// The manifest declares which compiled implementation backs the agent.
/// Both fields are optional; an empty file is a valid manifest.
///
/// # Example
///
/// ```yaml
/// # agents/fetch-page/agent.yaml
/// kind: http-fetch
/// description: Fetches a page body over HTTP
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AgentManifest {
    /// Implementation to construct, as a key into the dispatcher's factory
    /// table. Defaults to the agent's directory name when omitted.
    #[serde(default)]
    pub kind: Option<String>,

    /// Human-readable summary shown alongside the agent's documentation.
    #[serde(default)]
    pub description: Option<String>,
}

/// One resolved agent in the registry.
///
/// Descriptors are created when the registry is loaded and never mutated
/// afterwards; `resolve` hands out references to the same immutable entry
/// on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentDescriptor {
    /// Unique agent name (the discovery directory name).
    pub name: String,

    /// Factory key naming the compiled implementation.
    pub kind: String,

    /// Sidecar configuration from `config.yaml` / `config.json`.
    ///
    /// Empty when no sidecar file exists. Interpreted solely by the agent
    /// implementation; unknown keys are ignored.
    pub config: JsonMap,

    /// Directory the agent was discovered in, used for documentation
    /// lookup (`README.md`).
    pub dir: PathBuf,
}
