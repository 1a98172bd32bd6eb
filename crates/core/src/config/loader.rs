//! Loaders for `dispatch.toml` and pipeline files.

use crate::config::error::{ConfigError, ConfigResult};
use ad_protocol::config_models::GlobalConfig;
use ad_protocol::pipeline_models::PipelineSpec;
use std::path::Path;

/// Load project-wide settings from `<root>/dispatch.toml`.
///
/// A missing file is not an error; defaults apply. A file that exists but
/// cannot be read or parsed fails with [`ConfigError`].
pub fn load_global_config(root: &Path) -> ConfigResult<GlobalConfig> {
    let config_path = root.join("dispatch.toml");

    if !config_path.exists() {
        return Ok(GlobalConfig::default());
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    let config: GlobalConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path,
            source,
        })?;

    Ok(config)
}

/// Load a pipeline definition from a YAML or JSON file.
///
/// The format is chosen by extension: `.json` parses as JSON, everything
/// else as YAML. The file must exist.
pub fn load_pipeline(path: &Path) -> ConfigResult<PipelineSpec> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let spec = if path.extension().and_then(|s| s.to_str()) == Some("json") {
        serde_json::from_str(&content).map_err(|source| ConfigError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        serde_yaml::from_str(&content).map_err(|source| ConfigError::YamlParse {
            path: path.to_path_buf(),
            source,
        })?
    };

    Ok(spec)
}
