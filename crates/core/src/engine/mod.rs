//! Sequential pipeline execution.
//!
//! The engine is a small state machine over the step sequence: state is
//! `(current step index, previous output)`. Each step's input is resolved
//! against the previous output, dispatched, and the result carried forward.

use crate::dispatch::{DispatchError, Dispatcher};
use ad_protocol::pipeline_models::{OnStepError, PipelineSpec, PREV_OUTPUT};
use ad_protocol::JsonMap;
use serde_json::Value;

/// Drives a [`Dispatcher`] through the steps of a pipeline, in order.
pub struct PipelineEngine {
    dispatcher: Dispatcher,
    default_policy: OnStepError,
}

impl PipelineEngine {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            default_policy: OnStepError::default(),
        }
    }

    /// Set the failure policy used when a pipeline doesn't declare its own,
    /// typically the project default from `dispatch.toml`.
    pub fn with_default_policy(mut self, policy: OnStepError) -> Self {
        self.default_policy = policy;
        self
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Execute every step in order and return the last step's output.
    ///
    /// An empty pipeline is a valid no-op and returns `None`. A step whose
    /// agent fails contributes `None`: under [`OnStepError::Continue`] the
    /// run proceeds and the next step's `$prev` resolves to `null`; under
    /// [`OnStepError::Abort`] the run stops with
    /// [`DispatchError::StepFailed`]. Resolution and load errors always
    /// abort.
    pub async fn run(&self, spec: &PipelineSpec) -> Result<Option<Value>, DispatchError> {
        let policy = spec.on_error.unwrap_or(self.default_policy);
        let mut prev: Option<Value> = None;

        for (index, step) in spec.steps.iter().enumerate() {
            let input = resolve_input(&step.input, prev.as_ref());
            let output = self.dispatcher.run_agent(&step.agent, input).await?;

            if output.is_none() && policy == OnStepError::Abort {
                return Err(DispatchError::StepFailed {
                    index,
                    agent: step.agent.clone(),
                });
            }

            prev = output;
        }

        Ok(prev)
    }
}

/// Shallow-copy a step's input, substituting the previous step's output.
///
/// Only a top-level field whose value is exactly the string `"$prev"` is
/// replaced; the sentinel is never searched for inside nested objects or
/// arrays. With no previous output the field resolves to `null`.
pub fn resolve_input(input: &JsonMap, prev: Option<&Value>) -> JsonMap {
    let mut resolved = input.clone();
    for value in resolved.values_mut() {
        if value.as_str() == Some(PREV_OUTPUT) {
            *value = prev.cloned().unwrap_or(Value::Null);
        }
    }
    resolved
}
