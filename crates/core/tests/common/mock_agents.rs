//! Mock agent kinds for deterministic testing.

use ad_core::agents::base::{Agent, AgentError};
use ad_core::agents::AgentFactory;
use ad_core::logging::Logger;
use ad_protocol::JsonMap;
use async_trait::async_trait;
use serde_json::Value;

/// Always fails with the configured `message` (default "mock failure").
pub struct FailingAgent {
    config: JsonMap,
}

#[async_trait]
impl Agent for FailingAgent {
    async fn process(&self, _input: &JsonMap) -> Result<Value, AgentError> {
        let message = self
            .config
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("mock failure");
        Err(AgentError::External(message.to_string()))
    }
}

/// Always succeeds with the configured `value` (default `null`).
pub struct StaticAgent {
    config: JsonMap,
}

#[async_trait]
impl Agent for StaticAgent {
    async fn process(&self, _input: &JsonMap) -> Result<Value, AgentError> {
        Ok(self.config.get("value").cloned().unwrap_or(Value::Null))
    }
}

/// Register the mock kinds (`fail`, `static`) into a factory.
pub fn register(factory: &mut AgentFactory) {
    factory.register("fail", |config, _logger: Logger| {
        Box::new(FailingAgent { config })
    });
    factory.register("static", |config, _logger: Logger| {
        Box::new(StaticAgent { config })
    });
}
