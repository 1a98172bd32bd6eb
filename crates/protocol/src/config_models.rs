//! Project-wide configuration from `dispatch.toml`.

use crate::pipeline_models::OnStepError;
use serde::{Deserialize, Serialize};

/// Settings that apply to every pipeline run in a project.
///
/// Loaded from `dispatch.toml` at the project root; a missing file means
/// defaults.
///
/// # Example
///
/// ```toml
/// # dispatch.toml
/// on_error = "abort"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GlobalConfig {
    /// Default failure policy for pipelines that don't set their own.
    #[serde(default)]
    pub on_error: OnStepError,
}
