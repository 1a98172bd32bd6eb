//! `dispatch` — run and orchestrate pluggable agents.

use ad_core::agents::{AgentFactory, AgentRegistry};
use ad_core::config::{load_global_config, load_pipeline};
use ad_core::dispatch::Dispatcher;
use ad_core::engine::PipelineEngine;
use ad_core::logging::{ConsoleSink, LogSink};
use clap::{Parser, Subcommand};
use color_eyre::eyre::eyre;
use colored::Colorize;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "dispatch",
    about = "Agent dispatcher and pipeline runner",
    version,
    disable_help_subcommand = true
)]
struct Cli {
    /// Project directory containing the agents/ registry
    #[arg(long, global = true, default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available agents, one per line
    List,

    /// Run a single agent with a JSON input object
    Run {
        /// Agent name
        name: String,
        /// Input as a JSON object, e.g. '{"text": "hi"}'
        input: String,
    },

    /// Show an agent's documentation
    Help {
        /// Agent name
        name: String,
    },

    /// Execute a pipeline file (YAML or JSON)
    Pipeline {
        /// Path to the pipeline file
        file: PathBuf,
    },

    /// Concatenate all agents' documentation into one Markdown file
    Docgen {
        /// Output file path
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let registry = AgentRegistry::discover(&cli.project)?;
    let dispatcher = Dispatcher::new(
        registry,
        AgentFactory::with_builtins(),
        Arc::new(ConsoleSink) as Arc<dyn LogSink>,
    );

    match cli.command {
        Command::List => {
            for name in dispatcher.registry().list() {
                println!("{}", name);
            }
        }
        Command::Run { name, input } => {
            let input = parse_input(&input)?;
            if let Some(result) = dispatcher.run_agent(&name, input).await? {
                print_result(&result);
            }
        }
        Command::Help { name } => match dispatcher.agent_doc(&name)? {
            Some(doc) => println!("{}", doc),
            None => println!("No documentation for {}", name),
        },
        Command::Pipeline { file } => {
            let config = load_global_config(&cli.project)?;
            let spec = load_pipeline(&file)?;
            let engine = PipelineEngine::new(dispatcher).with_default_policy(config.on_error);
            engine.run(&spec).await?;
        }
        Command::Docgen { file } => {
            dispatcher.generate_docs(&file)?;
            println!("{} {}", "Wrote".green(), file.display());
        }
    }

    Ok(())
}

fn parse_input(raw: &str) -> color_eyre::Result<ad_protocol::JsonMap> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| eyre!("input is not valid JSON: {}", e))?;
    value
        .as_object()
        .cloned()
        .ok_or_else(|| eyre!("input must be a JSON object"))
}

/// Print an invocation result: strings raw, everything else as pretty JSON.
fn print_result(value: &Value) {
    match value {
        Value::String(s) => println!("{}", s),
        other => match serde_json::to_string_pretty(other) {
            Ok(rendered) => println!("{}", rendered),
            Err(_) => println!("{}", other),
        },
    }
}
