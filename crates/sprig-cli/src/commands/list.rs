//! `sprig list` command implementation.
//!
//! Listing is a best-effort helper path: a catalog fetch failure degrades
//! to an empty list with a warning instead of failing the command.

use sprig_core::error::SprigResult;
use sprig_registry::{Catalog, RegistryClient, RetryConfig};

use super::CommandContext;

/// Execute the `sprig list` command
pub async fn execute(ctx: &CommandContext) -> SprigResult<()> {
    let client = RegistryClient::with_config(ctx.registry_url.clone(), RetryConfig::default())?;

    let catalog = match client.get_all_components().await {
        Ok(catalog) => catalog,
        Err(e) => {
            ctx.output
                .warn(&format!("Could not fetch the component catalog: {}", e));
            Catalog::new()
        }
    };

    if catalog.is_empty() {
        ctx.output.info("No components available");
        return Ok(());
    }

    ctx.output.info(&format!("{} component(s) available:", catalog.len()));
    ctx.output.info("");
    for (name, record) in &catalog {
        ctx.output.info(&format!("  {:<24} {}", name, record.description));
    }

    Ok(())
}
