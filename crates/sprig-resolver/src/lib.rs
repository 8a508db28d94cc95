//! Component dependency resolution for Sprig
//!
//! This crate expands a requested set of component names into the full
//! ordered dependency closure, with cycle detection and deterministic
//! install ordering.

pub mod graph;

// Re-export main types
pub use graph::{resolve_install_order, DependencyLookup};

use sprig_core::error::SprigError;

/// Result type for resolver operations
pub type ResolverResult<T> = Result<T, SprigError>;
