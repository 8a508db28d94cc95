//! # sprig-core
//!
//! Core types and error taxonomy shared across all Sprig crates.
//!
//! This crate provides:
//! - ComponentRecord and ComponentFile types describing installable units
//! - DependencyCheck and VersionConflict types for npm reconciliation
//! - SprigError enum for unified error handling with remediation hints
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (ComponentRecord, FileKind, etc.)
//! - `error`: Error types and result aliases

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{SprigError, SprigResult};
pub use types::{ComponentFile, ComponentRecord, DependencyCheck, FileKind, VersionConflict};
