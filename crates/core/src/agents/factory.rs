//! Compile-time factory table mapping implementation kinds to constructors.
//!
//! This replaces the runtime module loading a dynamic language would use:
//! the set of implementations is closed at link time, but stays open to
//! embedders and tests through [`AgentFactory::register`].

use crate::agents::adapters::{EchoAgent, HttpFetchAgent, TemplateAgent};
use crate::agents::base::Agent;
use crate::dispatch::DispatchError;
use crate::logging::Logger;
use ad_protocol::JsonMap;
use std::collections::HashMap;

/// Constructor for one agent implementation.
///
/// Builders are plain function pointers; anything an instance needs beyond
/// its sidecar configuration and logger must come from the configuration.
pub type AgentBuilder = fn(JsonMap, Logger) -> Box<dyn Agent>;

/// Registry of agent constructors, keyed by implementation kind.
pub struct AgentFactory {
    builders: HashMap<String, AgentBuilder>,
}

impl AgentFactory {
    /// An empty factory with no registered kinds.
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// A factory preloaded with the builtin implementations:
    /// `echo`, `template`, and `http-fetch`.
    pub fn with_builtins() -> Self {
        let mut factory = Self::new();
        factory.register("echo", |config, logger| {
            Box::new(EchoAgent::new(config, logger))
        });
        factory.register("template", |config, logger| {
            Box::new(TemplateAgent::new(config, logger))
        });
        factory.register("http-fetch", |config, logger| {
            Box::new(HttpFetchAgent::new(config, logger))
        });
        factory
    }

    /// Register (or replace) a builder for a kind.
    pub fn register(&mut self, kind: impl Into<String>, builder: AgentBuilder) {
        self.builders.insert(kind.into(), builder);
    }

    /// Construct a fresh instance of the given kind.
    pub fn create(
        &self,
        kind: &str,
        config: JsonMap,
        logger: Logger,
    ) -> Result<Box<dyn Agent>, DispatchError> {
        let builder = self
            .builders
            .get(kind)
            .ok_or_else(|| DispatchError::ImplementationLoad(kind.to_string()))?;
        Ok(builder(config, logger))
    }

    /// All registered kinds, sorted.
    pub fn kinds(&self) -> Vec<String> {
        let mut kinds: Vec<String> = self.builders.keys().cloned().collect();
        kinds.sort();
        kinds
    }
}

impl Default for AgentFactory {
    fn default() -> Self {
        Self::with_builtins()
    }
}
