//! package.json manifest reading.
//!
//! The manifest is externally owned: the reconciler reads it fresh on
//! every dependency check so concurrent external edits are picked up, and
//! Sprig itself only ever appends to it through the npm subprocess.

use std::collections::HashMap;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use sprig_core::error::SprigError;

use crate::ConfigResult;

/// File name of the consumer's dependency manifest
pub const MANIFEST_FILE: &str = "package.json";

/// The subset of package.json the reconciler consumes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageManifest {
    /// Runtime dependencies
    #[serde(default)]
    pub dependencies: HashMap<String, String>,

    /// Development dependencies
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: HashMap<String, String>,

    /// Peer dependencies
    #[serde(default, rename = "peerDependencies")]
    pub peer_dependencies: HashMap<String, String>,
}

impl PackageManifest {
    /// Merge the three dependency maps into one lookup table.
    ///
    /// Later sources win on key collision: dependencies, then
    /// devDependencies, then peerDependencies overwrite.
    pub fn merged_dependencies(&self) -> HashMap<&str, &str> {
        let mut merged = HashMap::new();
        for (name, version) in &self.dependencies {
            merged.insert(name.as_str(), version.as_str());
        }
        for (name, version) in &self.dev_dependencies {
            merged.insert(name.as_str(), version.as_str());
        }
        for (name, version) in &self.peer_dependencies {
            merged.insert(name.as_str(), version.as_str());
        }
        merged
    }
}

/// Parse a package.json document, ignoring fields Sprig does not consume
pub fn parse_manifest(content: &str) -> ConfigResult<PackageManifest> {
    serde_json::from_str(content).map_err(|e| SprigError::JsonParse {
        message: format!("Invalid {}: {}", MANIFEST_FILE, e),
    })
}

/// Load package.json from a project directory.
///
/// A missing manifest means the directory is not an npm project, which is
/// an `InvalidProject` condition rather than a plain IO error.
pub async fn load_manifest(project_dir: &Utf8Path) -> ConfigResult<PackageManifest> {
    let path = project_dir.join(MANIFEST_FILE);
    let content = tokio::fs::read_to_string(&path).await.map_err(|_| {
        SprigError::InvalidProject {
            reason: format!("no {} found in {}", MANIFEST_FILE, project_dir),
        }
    })?;

    parse_manifest(&content)
}
