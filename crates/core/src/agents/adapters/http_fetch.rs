//! Agent that fetches a URL over HTTP and returns the response body.
//!
//! Configuration: `timeout_secs` (default 30) and `user_agent` (optional).

use crate::agents::base::{require_str, Agent, AgentError};
use crate::logging::Logger;
use ad_protocol::JsonMap;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct HttpFetchAgent {
    client: reqwest::Client,
    logger: Logger,
}

impl HttpFetchAgent {
    pub fn new(config: JsonMap, logger: Logger) -> Self {
        let timeout = config
            .get("timeout_secs")
            .and_then(Value::as_u64)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let mut builder = reqwest::Client::builder().timeout(Duration::from_secs(timeout));
        if let Some(user_agent) = config.get("user_agent").and_then(Value::as_str) {
            builder = builder.user_agent(user_agent.to_string());
        }

        Self {
            client: builder.build().unwrap_or_default(),
            logger,
        }
    }
}

impl From<reqwest::Error> for AgentError {
    fn from(source: reqwest::Error) -> Self {
        AgentError::External(source.to_string())
    }
}

#[async_trait]
impl Agent for HttpFetchAgent {
    async fn process(&self, input: &JsonMap) -> Result<Value, AgentError> {
        let url = require_str(input, "url")?;

        self.logger.info(format!("GET {}", url));
        let response = self.client.get(url).send().await?.error_for_status()?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        self.logger.info(format!("received {} bytes", body.len()));

        Ok(json!({ "status": status, "body": body }))
    }
}
