//! Configuration loading.
//!
//! Covers the project-wide `dispatch.toml` and pipeline definition files.
//! Per-agent sidecar configuration is loaded during registry discovery in
//! [`crate::agents::registry`].

pub mod error;
pub mod loader;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_global_config, load_pipeline};
