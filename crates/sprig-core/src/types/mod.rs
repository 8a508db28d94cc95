//! Core data types for the Sprig component installer.

pub mod component;
pub mod dependency;

pub use component::{ComponentFile, ComponentRecord, FileKind};
pub use dependency::{DependencyCheck, VersionConflict};
