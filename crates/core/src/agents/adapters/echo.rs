//! Agent that returns its `text` input unchanged.

use crate::agents::base::{Agent, AgentError};
use crate::logging::Logger;
use ad_protocol::JsonMap;
use async_trait::async_trait;
use serde_json::Value;

pub struct EchoAgent {
    logger: Logger,
}

impl EchoAgent {
    pub fn new(_config: JsonMap, logger: Logger) -> Self {
        Self { logger }
    }
}

#[async_trait]
impl Agent for EchoAgent {
    async fn process(&self, input: &JsonMap) -> Result<Value, AgentError> {
        let text = input
            .get("text")
            .cloned()
            .ok_or_else(|| AgentError::Validation("'text' field is required".to_string()))?;
        self.logger.info("echoing input");
        Ok(text)
    }
}
