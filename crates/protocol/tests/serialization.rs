//! Serialization round-trip tests for the shared models.

use ad_protocol::agent_models::AgentManifest;
use ad_protocol::config_models::GlobalConfig;
use ad_protocol::log_models::{LogEvent, LogLevel};
use ad_protocol::pipeline_models::{OnStepError, PipelineSpec, PREV_OUTPUT};
use serde_json::json;

#[test]
fn pipeline_spec_from_yaml() {
    let yaml = r#"
steps:
  - agent: fetch-page
    input:
      url: "https://example.org"
  - agent: summarize
    input:
      text: "$prev"
"#;

    let spec: PipelineSpec = serde_yaml::from_str(yaml).expect("valid pipeline YAML");

    assert_eq!(spec.steps.len(), 2);
    assert_eq!(spec.steps[0].agent, "fetch-page");
    assert_eq!(
        spec.steps[0].input.get("url"),
        Some(&json!("https://example.org"))
    );
    assert_eq!(spec.steps[1].input.get("text"), Some(&json!(PREV_OUTPUT)));
    assert_eq!(spec.on_error, None);
}

#[test]
fn pipeline_step_input_defaults_to_empty() {
    let yaml = "steps:\n  - agent: echo\n";
    let spec: PipelineSpec = serde_yaml::from_str(yaml).expect("valid pipeline YAML");

    assert_eq!(spec.steps.len(), 1);
    assert!(spec.steps[0].input.is_empty());
}

#[test]
fn pipeline_empty_steps_list_is_valid() {
    let spec: PipelineSpec = serde_yaml::from_str("steps: []").expect("valid pipeline YAML");
    assert!(spec.steps.is_empty());
}

#[test]
fn pipeline_on_error_parses_both_policies() {
    let spec: PipelineSpec =
        serde_yaml::from_str("steps: []\non_error: abort").expect("valid pipeline YAML");
    assert_eq!(spec.on_error, Some(OnStepError::Abort));

    let spec: PipelineSpec =
        serde_yaml::from_str("steps: []\non_error: continue").expect("valid pipeline YAML");
    assert_eq!(spec.on_error, Some(OnStepError::Continue));
}

#[test]
fn pipeline_spec_from_json() {
    let json = r#"{"steps": [{"agent": "echo", "input": {"text": "hi"}}]}"#;
    let spec: PipelineSpec = serde_json::from_str(json).expect("valid pipeline JSON");

    assert_eq!(spec.steps[0].agent, "echo");
    assert_eq!(spec.steps[0].input.get("text"), Some(&json!("hi")));
}

#[test]
fn agent_manifest_all_fields_optional() {
    let manifest: AgentManifest = serde_yaml::from_str("{}").expect("empty manifest is valid");
    assert_eq!(manifest, AgentManifest::default());

    let manifest: AgentManifest =
        serde_yaml::from_str("kind: http-fetch\ndescription: Fetches pages")
            .expect("valid manifest");
    assert_eq!(manifest.kind.as_deref(), Some("http-fetch"));
    assert_eq!(manifest.description.as_deref(), Some("Fetches pages"));
}

#[test]
fn global_config_from_toml() {
    let config: GlobalConfig = toml::from_str("on_error = \"abort\"").expect("valid toml");
    assert_eq!(config.on_error, OnStepError::Abort);

    let config: GlobalConfig = toml::from_str("").expect("empty toml is valid");
    assert_eq!(config.on_error, OnStepError::Continue);
}

#[test]
fn log_event_renders_pipe_separated_line() {
    let event = LogEvent::new(LogLevel::Error, "fetch-page", "connection refused");
    let line = event.to_string();

    let parts: Vec<&str> = line.split(" | ").collect();
    assert_eq!(parts.len(), 4);
    assert_eq!(parts[1], "ERROR");
    assert_eq!(parts[2], "fetch-page");
    assert_eq!(parts[3], "connection refused");
}

#[test]
fn log_level_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&LogLevel::Info).expect("serializable"), "\"INFO\"");
    assert_eq!(LogLevel::Warn.to_string(), "WARN");
}
