//! Component registry client for Sprig
//!
//! This crate provides the HTTP client for fetching component records and
//! the full catalog from the registry, with bounded retry and typed
//! failure classification. All registry access in the installer routes
//! through this client.

pub mod api;
pub mod client;

// Re-export main types
pub use api::Catalog;
pub use client::{RegistryClient, RetryConfig};

use sprig_core::error::SprigError;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, SprigError>;
