//! Configuration parsing for the Sprig component installer
//!
//! This crate handles reading and validating sprig.json (the project
//! configuration) and package.json (the consumer's dependency manifest),
//! providing a unified configuration interface for the installer.

pub mod manifest;
pub mod store;

// Re-export main types
pub use manifest::PackageManifest;
pub use store::{ConfigStore, CssFramework, ProjectConfig, ProjectType};

use sprig_core::error::SprigError;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, SprigError>;
