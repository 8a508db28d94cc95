//! npm dependency reconciliation and installation.
//!
//! Reconciliation compares required package specifiers against the
//! project's package.json, which is re-read on every check. Versions are
//! compared as exact strings; range semantics are the package manager's
//! business, not ours.

use camino::Utf8Path;
use tracing::{debug, info};

use sprig_config::manifest;
use sprig_core::error::SprigError;
use sprig_core::types::{DependencyCheck, VersionConflict};

use crate::InstallerResult;

/// Version sentinel for specifiers without an explicit pin
pub const LATEST: &str = "latest";

/// Split a specifier into `(package_name, requested_version)`.
///
/// A `@` that is not the scope marker separates name from version, so
/// `@radix-ui/react-slot@1.0.0` splits after the scoped name while a bare
/// `@types/node` stays whole with the `latest` sentinel.
pub fn split_specifier(spec: &str) -> (&str, &str) {
    let split_at = if let Some(rest) = spec.strip_prefix('@') {
        // Scoped: only a second '@' after the scope delimits a version
        rest.find('@').map(|i| i + 1)
    } else {
        spec.find('@')
    };

    match split_at {
        Some(i) => (&spec[..i], &spec[i + 1..]),
        None => (spec, LATEST),
    }
}

/// Classify `specifiers` against the project manifest.
///
/// Each specifier lands in exactly one of: `missing` (verbatim specifier
/// string), or `existing` (package name) with an optional conflict entry
/// when a concrete pin differs from the installed version string.
pub async fn check_dependencies(
    project_dir: &Utf8Path,
    specifiers: &[String],
) -> InstallerResult<DependencyCheck> {
    // Fresh read every call so concurrent external edits are picked up
    let manifest = manifest::load_manifest(project_dir).await?;
    let installed = manifest.merged_dependencies();

    let mut check = DependencyCheck::default();

    for specifier in specifiers {
        let (name, requested) = split_specifier(specifier);

        match installed.get(name) {
            None => check.missing.push(specifier.clone()),
            Some(&installed_version) => {
                check.existing.push(name.to_string());

                if requested != LATEST && requested != installed_version {
                    check.conflicts.push(VersionConflict {
                        name: name.to_string(),
                        installed: installed_version.to_string(),
                        required: requested.to_string(),
                    });
                }
            }
        }
    }

    debug!(
        missing = check.missing.len(),
        existing = check.existing.len(),
        conflicts = check.conflicts.len(),
        "reconciled npm dependencies"
    );
    Ok(check)
}

/// Options for the package-manager invocation
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Install as devDependencies
    pub dev: bool,
    /// Pin exact versions in the manifest
    pub exact: bool,
    /// Suppress npm's own output
    pub silent: bool,
}

/// Argument list for a single `npm install` invocation
fn build_install_args(packages: &[String], options: InstallOptions) -> Vec<String> {
    let mut args = vec!["install".to_string()];
    if options.dev {
        args.push("--save-dev".to_string());
    }
    if options.exact {
        args.push("--save-exact".to_string());
    }
    if options.silent {
        args.push("--silent".to_string());
    }
    args.extend(packages.iter().cloned());
    args
}

/// Install `packages` into the project via one npm subprocess.
///
/// No-ops on empty input. The call blocks until the subprocess exits;
/// exit code 0 is success, anything else is a typed installation failure.
pub async fn install_packages(
    project_dir: &Utf8Path,
    packages: &[String],
    options: InstallOptions,
) -> InstallerResult<()> {
    if packages.is_empty() {
        return Ok(());
    }

    let args = build_install_args(packages, options);
    info!(?packages, "running npm install");

    let status = tokio::process::Command::new("npm")
        .args(&args)
        .current_dir(project_dir)
        .status()
        .await
        .map_err(|e| SprigError::MissingDependency {
            packages: packages.to_vec(),
            reason: format!("failed to launch npm: {}", e),
        })?;

    if !status.success() {
        return Err(SprigError::MissingDependency {
            packages: packages.to_vec(),
            reason: format!("npm install exited with {}", status),
        });
    }

    Ok(())
}
