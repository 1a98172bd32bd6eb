//! # ad-protocol
//!
//! Shared data models for agent-dispatch.
//!
//! This crate defines the serde types exchanged between the core engine and
//! its consumers:
//!
//! - [`agent_models`]: agent entry-point manifests and registry descriptors
//! - [`pipeline_models`]: pipeline specifications and step definitions
//! - [`log_models`]: dispatcher log events
//! - [`config_models`]: project-wide settings from `dispatch.toml`

pub mod agent_models;
pub mod config_models;
pub mod log_models;
pub mod pipeline_models;

/// A JSON object used for invocation inputs and agent configuration.
///
/// The core enforces no schema on these mappings; each agent validates the
/// fields it requires.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
