//! Kadro CLI — the main entry point.
//!
//! Commands:
//! - `build`    — Compose and print an agent's system prompt
//! - `agents`   — List registered agents
//! - `inspect`  — Size, template and baseline report for one agent
//! - `stats`    — Optimization baselines
//! - `estimate` — Token estimate for arbitrary text
//! - `check`    — Verify registry, baselines and config agree
//! - `config`   — Show, locate or validate configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "kadro",
    about = "Kadro — multi-agent system prompt composer",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the system prompt for an agent
    Build {
        /// Agent id (e.g. fevzi, tacettin, erdem)
        agent: String,

        /// Request context as a JSON object
        #[arg(short, long)]
        context: Option<String>,
    },

    /// List registered agents
    Agents {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report prompt size, template and baseline for an agent
    Inspect {
        agent: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show optimization baselines
    Stats {
        /// Limit to one agent
        agent: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate tokens for text, a file, or stdin
    Estimate {
        text: Option<String>,

        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },

    /// Verify the registry, baselines and configuration
    Check,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Validate the configuration
    Validate,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build { agent, context } => commands::build::run(agent, context).await,
        Commands::Agents { json } => commands::agents::run(json).await,
        Commands::Inspect { agent, json } => commands::inspect::run(agent, json).await,
        Commands::Stats { agent, json } => commands::stats::run(agent, json).await,
        Commands::Estimate { text, file } => commands::estimate::run(text, file).await,
        Commands::Check => commands::check::run().await,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show().await,
            ConfigAction::Path => commands::config_cmd::path().await,
            ConfigAction::Validate => commands::config_cmd::validate().await,
        },
    };

    if let Err(e) = result {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}
