//! Command implementations and dispatch logic.
//!
//! Each command is an async function taking a `CommandContext`, which
//! carries the working directory, the registry endpoint, and the output
//! handler for the whole invocation.

use camino::Utf8PathBuf;
use tracing::info;

use sprig_core::error::{SprigError, SprigResult};

pub mod add;
pub mod init;
pub mod list;

#[cfg(test)]
mod tests;

use crate::output::OutputHandler;
use crate::Commands;

/// Shared context for all commands
pub struct CommandContext {
    pub cwd: Utf8PathBuf,
    pub registry_url: String,
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a context for the current working directory
    pub fn new(registry_url: String, silent: bool) -> SprigResult<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| SprigError::io("Failed to get current directory".to_string(), e))?;
        let cwd = Utf8PathBuf::from_path_buf(cwd).map_err(|p| SprigError::InvalidProject {
            reason: format!("working directory is not valid UTF-8: {}", p.display()),
        })?;

        let output = if silent {
            OutputHandler::silent()
        } else {
            OutputHandler::new()
        };

        Ok(Self {
            cwd,
            registry_url,
            output,
        })
    }
}

/// Dispatch a command to its handler
pub async fn dispatch_command(command: Commands, ctx: &CommandContext) -> SprigResult<()> {
    match command {
        Commands::Add {
            components,
            force,
            backup,
            skip_deps,
            silent,
            components_dir,
        } => {
            info!(?components, "adding components");
            let options = add::AddOptions {
                force,
                backup,
                skip_deps,
                silent,
                components_dir,
            };
            add::execute(components, options, ctx).await
        }
        Commands::List => {
            info!("listing available components");
            list::execute(ctx).await
        }
        Commands::Init { force } => {
            info!("initializing project configuration");
            init::execute(force, ctx).await
        }
    }
}
