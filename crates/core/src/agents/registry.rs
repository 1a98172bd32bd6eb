//! Agent discovery and name resolution.
//!
//! The registry is built once by scanning a project's `agents/` directory
//! and is never mutated afterwards. Every immediate subdirectory containing
//! an `agent.yaml` entry point is an agent named after the subdirectory;
//! an optional sidecar `config.yaml` or `config.json` supplies its
//! configuration.

use crate::config::error::{ConfigError, ConfigResult};
use crate::dispatch::DispatchError;
use ad_protocol::agent_models::{AgentDescriptor, AgentManifest};
use ad_protocol::JsonMap;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

/// Immutable mapping from agent name to descriptor.
#[derive(Debug, Default)]
pub struct AgentRegistry {
    entries: BTreeMap<String, AgentDescriptor>,
}

impl AgentRegistry {
    /// Build a registry by scanning `<project_dir>/agents`.
    ///
    /// A missing `agents` directory yields an empty registry. Malformed
    /// manifest or sidecar files fail the whole load; discovery is meant
    /// to run once at startup and surface broken plugins immediately.
    pub fn discover(project_dir: &Path) -> ConfigResult<Self> {
        let agents_dir = project_dir.join("agents");

        if !agents_dir.is_dir() {
            return Ok(Self::default());
        }

        let mut entries = BTreeMap::new();

        for entry in WalkDir::new(&agents_dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|source| ConfigError::DirectoryWalk {
                path: agents_dir.clone(),
                source,
            })?;

            if !entry.file_type().is_dir() {
                continue;
            }

            let dir = entry.path();
            let manifest_path = dir.join("agent.yaml");
            if !manifest_path.is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            let manifest = load_manifest(&manifest_path)?;
            let config = load_sidecar_config(dir)?;

            entries.insert(
                name.clone(),
                AgentDescriptor {
                    kind: manifest.kind.unwrap_or_else(|| name.clone()),
                    name,
                    config,
                    dir: dir.to_path_buf(),
                },
            );
        }

        Ok(Self { entries })
    }

    /// Resolve an agent name to its descriptor.
    pub fn resolve(&self, name: &str) -> Result<&AgentDescriptor, DispatchError> {
        self.entries
            .get(name)
            .ok_or_else(|| DispatchError::AgentNotFound(name.to_string()))
    }

    /// All agent names, sorted lexicographically.
    pub fn list(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn load_manifest(path: &Path) -> ConfigResult<AgentManifest> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Ok(AgentManifest::default());
    }

    serde_yaml::from_str(&content).map_err(|source| ConfigError::YamlParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load `config.yaml` or `config.json` from an agent directory.
///
/// Absence means empty configuration, not an error. The file must contain
/// a mapping (or nothing); unknown keys are passed through untouched for
/// the agent implementation to interpret.
fn load_sidecar_config(dir: &Path) -> ConfigResult<JsonMap> {
    let yaml_path = dir.join("config.yaml");
    let json_path = dir.join("config.json");

    let (path, content) = if yaml_path.is_file() {
        let content = std::fs::read_to_string(&yaml_path).map_err(|source| {
            ConfigError::FileRead {
                path: yaml_path.clone(),
                source,
            }
        })?;
        (yaml_path, content)
    } else if json_path.is_file() {
        let content = std::fs::read_to_string(&json_path).map_err(|source| {
            ConfigError::FileRead {
                path: json_path.clone(),
                source,
            }
        })?;
        (json_path, content)
    } else {
        return Ok(JsonMap::new());
    };

    if content.trim().is_empty() {
        return Ok(JsonMap::new());
    }

    let value: Value = if path.extension().and_then(|s| s.to_str()) == Some("json") {
        serde_json::from_str(&content).map_err(|source| ConfigError::JsonParse {
            path: path.clone(),
            source,
        })?
    } else {
        serde_yaml::from_str(&content).map_err(|source| ConfigError::YamlParse {
            path: path.clone(),
            source,
        })?
    };

    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(JsonMap::new()),
        _ => Err(ConfigError::InvalidConfig {
            path,
            reason: "agent configuration must be a mapping".to_string(),
        }),
    }
}
