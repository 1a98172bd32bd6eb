//! Agent that renders a configured template against its input fields.
//!
//! The sidecar configuration supplies the template; every `{field}`
//! placeholder is replaced with the matching top-level input value.
//! Strings substitute verbatim, other values as compact JSON.

use crate::agents::base::{Agent, AgentError};
use crate::logging::Logger;
use ad_protocol::JsonMap;
use async_trait::async_trait;
use serde_json::Value;

pub struct TemplateAgent {
    config: JsonMap,
    logger: Logger,
}

impl TemplateAgent {
    pub fn new(config: JsonMap, logger: Logger) -> Self {
        Self { config, logger }
    }
}

#[async_trait]
impl Agent for TemplateAgent {
    async fn process(&self, input: &JsonMap) -> Result<Value, AgentError> {
        let template = self
            .config
            .get("template")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                AgentError::Validation("'template' configuration entry is required".to_string())
            })?;

        let mut rendered = template.to_string();
        for (field, value) in input {
            let placeholder = format!("{{{}}}", field);
            let replacement = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            rendered = rendered.replace(&placeholder, &replacement);
        }

        self.logger.info("rendered template");
        Ok(Value::String(rendered))
    }
}
