//! Agent contract, registry, and implementations.
//!
//! This module provides the `Agent` trait every plugin implements, the
//! directory-discovery `AgentRegistry`, and the compile-time `AgentFactory`
//! that maps an implementation kind to its constructor.

pub mod adapters;
pub mod base;
pub mod factory;
pub mod registry;

pub use base::{Agent, AgentError};
pub use factory::{AgentBuilder, AgentFactory};
pub use registry::AgentRegistry;
