//! Shared helpers for the integration suites.
#![allow(dead_code)]

pub mod fixtures;
pub mod mock_agents;
