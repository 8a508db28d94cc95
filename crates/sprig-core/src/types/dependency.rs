//! npm reconciliation result types.

use serde::{Deserialize, Serialize};

/// A required package whose installed version differs from the pin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionConflict {
    pub name: String,
    pub installed: String,
    pub required: String,
}

/// Outcome of reconciling required specifiers against the project manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyCheck {
    /// Original specifier strings absent from the manifest
    pub missing: Vec<String>,
    /// Package names already present, conflicting or not
    pub existing: Vec<String>,
    /// Exact-string version mismatches between pin and manifest
    pub conflicts: Vec<VersionConflict>,
}

impl DependencyCheck {
    /// True when nothing needs to be installed and nothing conflicts
    pub fn is_satisfied(&self) -> bool {
        self.missing.is_empty() && self.conflicts.is_empty()
    }
}
