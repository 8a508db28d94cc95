//! `sprig add` command implementation — the install orchestrator.
//!
//! Each requested component is an independent unit of work: fetch its
//! record, resolve its dependency closure, write dependency files before
//! the target's own files, reconcile npm packages, then write utilities.
//! The first failing component stops the whole batch; files already on
//! disk stay there (at-most-once per component, no batch rollback).

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use sprig_config::{ConfigStore, ProjectConfig};
use sprig_core::error::{SprigError, SprigResult};
use sprig_core::types::{ComponentFile, ComponentRecord};
use sprig_installer::{
    check_dependencies, install_packages, FileInstaller, InstallOptions, WriteOutcome,
    WritePolicy,
};
use sprig_registry::{RegistryClient, RetryConfig};
use sprig_resolver::{resolve_install_order, DependencyLookup};

use super::CommandContext;

/// Flags consumed by the orchestrator
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    pub force: bool,
    pub backup: bool,
    pub skip_deps: bool,
    pub silent: bool,
    pub components_dir: Option<Utf8PathBuf>,
}

/// Execute the `sprig add` command
pub async fn execute(
    components: Vec<String>,
    options: AddOptions,
    ctx: &CommandContext,
) -> SprigResult<()> {
    if components.is_empty() {
        return Err(SprigError::InvalidCommand {
            reason: "no component names given".to_string(),
        });
    }

    let mut config = ConfigStore::new(ctx.cwd.clone()).read().await?;
    if let Some(dir) = &options.components_dir {
        config.components_dir = dir.clone();
    }

    let client = RegistryClient::with_config(ctx.registry_url.clone(), RetryConfig::default())?;

    for name in &components {
        ctx.output.step("📦", &format!("Installing {}", name));
        install_component(name, &client, &config, &options, ctx).await?;
        ctx.output.success(&format!("Installed {}", name));
    }

    Ok(())
}

/// Install one requested component and its dependency closure
async fn install_component(
    name: &str,
    client: &RegistryClient,
    config: &ProjectConfig,
    options: &AddOptions,
    ctx: &CommandContext,
) -> SprigResult<()> {
    let record = client.get_component(name).await?;

    let catalog = client.get_all_components().await?;
    let lookup: DependencyLookup = catalog
        .iter()
        .map(|(n, r)| (n.clone(), r.component_dependencies.clone()))
        .collect();

    let requested = vec![name.to_string()];
    let order = resolve_install_order(&requested, &lookup)?;
    debug!(?order, "resolved install order");

    let installer = FileInstaller::new();
    let policy = WritePolicy {
        force: options.force,
        backup: options.backup,
    };
    let components_dir = config.components_dir_in(&ctx.cwd);
    let utils_dir = config.utils_dir_in(&ctx.cwd);

    // Dependencies first, in resolved order, so a dependency's files are
    // on disk before its dependent's
    for dep_name in order.iter().filter(|n| n.as_str() != name) {
        let dep = client.get_component(dep_name).await?;
        ctx.output.step("🧩", &format!("Installing dependency {}", dep_name));
        write_files(&dep.files, &components_dir, &installer, policy, ctx).await?;
        write_files(&dep.utils, &utils_dir, &installer, policy, ctx).await?;
    }

    // The target's primary file, then its auxiliary files
    if let Some(primary) = record.primary_file() {
        write_one(primary, &components_dir, &installer, policy, ctx).await?;
    }
    let auxiliary: Vec<ComponentFile> = record.auxiliary_files().cloned().collect();
    write_files(&auxiliary, &components_dir, &installer, policy, ctx).await?;

    if !options.skip_deps {
        reconcile_npm(&record, options, ctx).await?;
    }

    // Separate utility files go in last
    write_files(&record.utils, &utils_dir, &installer, policy, ctx).await?;

    Ok(())
}

/// Reconcile the target's npm dependencies against package.json and
/// install whatever is missing
async fn reconcile_npm(
    record: &ComponentRecord,
    options: &AddOptions,
    ctx: &CommandContext,
) -> SprigResult<()> {
    if record.npm_dependencies.is_empty() {
        return Ok(());
    }

    let check = check_dependencies(&ctx.cwd, &record.npm_dependencies).await?;

    if !check.conflicts.is_empty() {
        if !options.force {
            return Err(SprigError::DependencyConflict {
                conflicts: check.conflicts,
            });
        }
        ctx.output.warn(&format!(
            "Ignoring {} version conflict(s) because --force is set",
            check.conflicts.len()
        ));
    }

    if !check.existing.is_empty() {
        ctx.output.info(&format!(
            "  {} npm package(s) already installed",
            check.existing.len()
        ));
    }

    if !check.missing.is_empty() {
        ctx.output.step("📥", &format!("Installing {} npm package(s)", check.missing.len()));
        install_packages(
            &ctx.cwd,
            &check.missing,
            InstallOptions {
                dev: false,
                exact: false,
                silent: options.silent,
            },
        )
        .await?;
    }

    Ok(())
}

async fn write_files(
    files: &[ComponentFile],
    target_dir: &Utf8Path,
    installer: &FileInstaller,
    policy: WritePolicy,
    ctx: &CommandContext,
) -> SprigResult<()> {
    for file in files {
        write_one(file, target_dir, installer, policy, ctx).await?;
    }
    Ok(())
}

/// Write a single file and report its individual outcome
async fn write_one(
    file: &ComponentFile,
    target_dir: &Utf8Path,
    installer: &FileInstaller,
    policy: WritePolicy,
    ctx: &CommandContext,
) -> SprigResult<()> {
    let path = target_dir.join(&file.relative_path);
    let outcome = installer.write_managed(&path, &file.content, policy).await?;

    let emoji = match outcome {
        WriteOutcome::Skipped => "⏭️",
        _ => "📄",
    };
    ctx.output
        .step(emoji, &format!("{} ({})", path, outcome));
    Ok(())
}
