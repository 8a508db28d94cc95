//! Conflict-aware file installation and npm reconciliation for Sprig
//!
//! This crate owns every write the installer performs against the consumer
//! project: component source files (with a skip/backup/overwrite conflict
//! policy) and npm package installation through the package manager.

pub mod files;
pub mod npm;

// Re-export main types
pub use files::{ConflictCheck, ConflictChoice, FileInstaller, WriteOutcome, WritePolicy};
pub use npm::{check_dependencies, install_packages, split_specifier, InstallOptions};

use sprig_core::error::SprigError;

/// Result type for installer operations
pub type InstallerResult<T> = Result<T, SprigError>;
