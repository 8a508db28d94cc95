//! # sprig-cli
//!
//! Command-line scaffolding tool that copies React UI component sources
//! (and their utility and npm dependencies) from a registry into a
//! consumer project.
//!
//! This is the main entry point: it parses arguments, sets up logging,
//! and dispatches to the command handlers.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::CommandContext;
use output::errors::ErrorFormatter;

/// Copy React UI components and their dependencies into your project
#[derive(Parser)]
#[command(name = "sprig", version, about = "Component scaffolding for React projects")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Registry endpoint override
    #[arg(long, global = true, env = "SPRIG_REGISTRY")]
    pub registry: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Install one or more components and their dependencies
    Add {
        /// Component names to install
        components: Vec<String>,
        /// Overwrite existing files without asking
        #[arg(short, long)]
        force: bool,
        /// Back up existing files before overwriting
        #[arg(short, long)]
        backup: bool,
        /// Skip npm dependency installation
        #[arg(long)]
        skip_deps: bool,
        /// Suppress progress output
        #[arg(short, long)]
        silent: bool,
        /// Install components into this directory instead of the configured one
        #[arg(long, value_name = "PATH")]
        components_dir: Option<Utf8PathBuf>,
    },
    /// List components available in the registry
    List,
    /// Create a default sprig.json in the current directory
    Init {
        /// Overwrite an existing sprig.json
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if let Err(error) = run_cli(cli) {
        let formatter = ErrorFormatter::new();
        eprintln!("{}", formatter.format_error(&error));
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> sprig_core::error::SprigResult<()> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| sprig_core::error::SprigError::io(
            "Failed to create async runtime".to_string(),
            e,
        ))?;

    let registry_url = cli
        .registry
        .unwrap_or_else(|| sprig_registry::client::DEFAULT_REGISTRY_URL.to_string());

    let silent = matches!(&cli.command, Commands::Add { silent: true, .. });

    rt.block_on(async {
        let ctx = CommandContext::new(registry_url, silent)?;
        commands::dispatch_command(cli.command, &ctx).await
    })
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "sprig={level},sprig_core={level},sprig_registry={level},sprig_resolver={level},sprig_installer={level}"
        ))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
