//! The `Agent` trait and supporting types.

use ad_protocol::JsonMap;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors an agent can raise from `process`.
///
/// Both variants are caught by the dispatcher, logged, and converted into
/// an empty invocation result; they never propagate to callers.
#[derive(Error, Debug)]
pub enum AgentError {
    /// A required input field is missing or malformed.
    #[error("invalid input: {0}")]
    Validation(String),

    /// An outbound call made by the agent failed (HTTP, model invocation).
    #[error("external call failed: {0}")]
    External(String),
}

/// The capability contract every pluggable agent implements.
///
/// Instances are constructed per invocation from their sidecar
/// configuration plus a [`crate::logging::Logger`] handle, and discarded
/// once `process` returns. Each invocation is stateless with respect to
/// prior invocations; configuration is immutable for the instance's
/// lifetime.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Process a structured input mapping and return a structured output.
    async fn process(&self, input: &JsonMap) -> Result<Value, AgentError>;
}

/// Fetch a required string field from an invocation input.
pub fn require_str<'a>(input: &'a JsonMap, field: &str) -> Result<&'a str, AgentError> {
    input
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| AgentError::Validation(format!("'{}' field is required", field)))
}
