//! `sprig init` command implementation.
//!
//! Writes a default sprig.json and ensures the target directories exist.
//! Deliberately non-interactive; edit the file to customize.

use sprig_config::{ConfigStore, ProjectConfig};
use sprig_core::error::{SprigError, SprigResult};

use super::CommandContext;

/// Execute the `sprig init` command
pub async fn execute(force: bool, ctx: &CommandContext) -> SprigResult<()> {
    let store = ConfigStore::new(ctx.cwd.clone());
    let config_path = store.config_path();

    if config_path.exists() && !force {
        ctx.output
            .info("sprig.json already exists, skipping initialization");
        return Ok(());
    }

    ctx.output.step("🌱", "Initializing Sprig configuration");

    let config = ProjectConfig::default();
    store.write(&config).await?;

    for dir in [
        config.components_dir_in(&ctx.cwd),
        config.utils_dir_in(&ctx.cwd),
    ] {
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| SprigError::classify_io(dir.as_str(), e))?;
    }

    ctx.output.success("Created sprig.json");
    ctx.output.info("");
    ctx.output.info("Next steps:");
    ctx.output.info("  sprig list");
    ctx.output.info("  sprig add <component>");

    Ok(())
}
