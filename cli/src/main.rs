// Actionkit CLI - Local Harness Entry Point

use std::io::Read;
use std::path::PathBuf;

use actionkit_config::Config;
use actionkit_core::{HandlerRouter, SchemaRegistry, build_dispatcher, handlers};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

/// Actionkit - schema-driven action dispatcher for conversational agents
#[derive(Parser, Debug)]
#[command(name = "actionkit")]
#[command(version, about, long_about = None)]
struct TopCli {
    /// Configuration file (TOML); built-in defaults when omitted
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
enum Commands {
    /// Dispatch one invocation event and print the response envelope
    Invoke {
        /// Event file (JSON); read from stdin when omitted
        #[arg(short = 'e', long = "event")]
        event: Option<PathBuf>,
    },

    /// Print the function schema advertised to the agent
    Schema,

    /// Validate the configuration and report unbound functions
    Check,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info".to_string())
                .as_str(),
        )
        .init();

    let cli = TopCli::parse();
    let config = actionkit_config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Invoke { event } => invoke(&config, event),
        Commands::Schema => print_schema(&config),
        Commands::Check => check(&config),
    }
}

/// Dispatch a single event
fn invoke(config: &Config, event: Option<PathBuf>) -> Result<()> {
    let raw = match event {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read event from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read event from stdin")?;
            buffer
        }
    };

    let dispatcher = build_dispatcher(config)?;
    let response = dispatcher.handle_json(&raw);

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Print the advertised function schema
fn print_schema(config: &Config) -> Result<()> {
    let registry = SchemaRegistry::from_specs(config.functions.iter().cloned())?;
    println!(
        "{}",
        serde_json::to_string_pretty(&registry.function_schema())?
    );
    Ok(())
}

/// Validate configuration and report declared functions without a handler
fn check(config: &Config) -> Result<()> {
    let registry = SchemaRegistry::from_specs(config.functions.iter().cloned())?;

    let mut router = HandlerRouter::new();
    handlers::register_builtin_handlers(&mut router);

    let mut unbound = 0;
    for spec in registry.list() {
        if router.get(&spec.name).is_none() {
            println!("warning: function '{}' has no handler bound", spec.name);
            unbound += 1;
        }
    }

    info!(
        functions = config.functions.len(),
        unbound, "configuration is valid"
    );
    println!(
        "{} function(s) declared, {} without a handler",
        config.functions.len(),
        unbound
    );
    Ok(())
}
