//! Pipeline specification models.
//!
//! A pipeline is an ordered list of agent invocations. Steps execute
//! strictly in sequence; a step's output becomes available to the next
//! step through the [`PREV_OUTPUT`] placeholder.

use crate::JsonMap;
use serde::{Deserialize, Serialize};

/// Placeholder value that forwards the previous step's output.
///
/// When a **top-level** field of a step's input equals this exact string,
/// the engine replaces it with the value the prior step returned (`null`
/// before the first step or after a swallowed failure). Occurrences nested
/// inside objects or arrays are left untouched.
pub const PREV_OUTPUT: &str = "$prev";

/// What the engine does when a step's agent fails.
///
/// Failures here are `process` errors, which the dispatcher swallows and
/// logs; resolution and load errors always abort the run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OnStepError {
    /// Keep going; the failed step contributes a `null` previous output.
    #[default]
    Continue,

    /// Stop the run at the failing step.
    Abort,
}

/// A single pipeline step: which agent to run and with what input.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Step {
    /// Name of the agent to invoke, as registered in the agent registry.
    pub agent: String,

    /// Input mapping handed to the agent after placeholder resolution.
    #[serde(default)]
    pub input: JsonMap,
}

/// A full pipeline definition, loaded from a YAML or JSON file.
///
/// # Example
///
/// ```yaml
/// on_error: abort
/// steps:
///   - agent: fetch-page
///     input:
///       url: "https://example.org"
///   - agent: summarize
///     input:
///       text: "$prev"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PipelineSpec {
    /// Ordered steps. An empty list is a valid no-op pipeline.
    #[serde(default)]
    pub steps: Vec<Step>,

    /// Per-pipeline failure policy. Falls back to the project default from
    /// `dispatch.toml` when omitted.
    #[serde(default)]
    pub on_error: Option<OnStepError>,
}
