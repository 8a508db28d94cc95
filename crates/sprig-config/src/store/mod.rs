//! Project configuration store (sprig.json).
//!
//! The configuration is read once per command invocation and treated as an
//! immutable input for the duration of an install. The install pipeline
//! never writes it; only `sprig init` creates the file.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use sprig_core::error::SprigError;

use crate::ConfigResult;

/// File name of the persisted project configuration
pub const CONFIG_FILE: &str = "sprig.json";

/// Persisted per-project settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Directory component files are written into
    pub components_dir: Utf8PathBuf,

    /// Directory shared utility files are written into
    pub utils_dir: Utf8PathBuf,

    /// Styling approach the project uses
    pub css_framework: CssFramework,

    /// Whether the project is TypeScript
    pub typescript: bool,

    /// Detected project flavor
    #[serde(default)]
    pub project_type: ProjectType,
}

/// Styling approach of the consumer project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssFramework {
    Tailwind,
    Css,
    Scss,
}

/// Consumer project flavor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    Next,
    Vite,
    CreateReactApp,
    #[default]
    Unknown,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            components_dir: Utf8PathBuf::from("src/components/ui"),
            utils_dir: Utf8PathBuf::from("src/lib"),
            css_framework: CssFramework::Tailwind,
            typescript: true,
            project_type: ProjectType::Unknown,
        }
    }
}

/// Reader for the persisted project configuration
#[derive(Debug, Clone)]
pub struct ConfigStore {
    project_dir: Utf8PathBuf,
}

impl ConfigStore {
    pub fn new(project_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
        }
    }

    /// Path of the configuration file inside the project
    pub fn config_path(&self) -> Utf8PathBuf {
        self.project_dir.join(CONFIG_FILE)
    }

    /// Read and validate the project configuration.
    ///
    /// A missing or malformed file surfaces as `InvalidProject`, which the
    /// CLI reports as "project not initialized".
    pub async fn read(&self) -> ConfigResult<ProjectConfig> {
        let path = self.config_path();
        let content = tokio::fs::read_to_string(&path).await.map_err(|_| {
            SprigError::InvalidProject {
                reason: format!("no {} found in {}", CONFIG_FILE, self.project_dir),
            }
        })?;

        parse_config(&content).map_err(|e| SprigError::InvalidProject {
            reason: format!("{} is malformed: {}", path, e),
        })
    }

    /// Write `config` to disk, used only by `sprig init`
    pub async fn write(&self, config: &ProjectConfig) -> ConfigResult<()> {
        let path = self.config_path();
        let content = serde_json::to_string_pretty(config).map_err(|e| {
            SprigError::JsonParse {
                message: format!("Failed to serialize {}: {}", CONFIG_FILE, e),
            }
        })?;

        tokio::fs::write(&path, content)
            .await
            .map_err(|e| SprigError::io(format!("Failed to write {}", path), e))
    }
}

fn parse_config(content: &str) -> Result<ProjectConfig, serde_json::Error> {
    serde_json::from_str(content)
}

impl ProjectConfig {
    /// Absolute component directory for a given project root
    pub fn components_dir_in(&self, project_dir: &Utf8Path) -> Utf8PathBuf {
        project_dir.join(&self.components_dir)
    }

    /// Absolute utils directory for a given project root
    pub fn utils_dir_in(&self, project_dir: &Utf8Path) -> Utf8PathBuf {
        project_dir.join(&self.utils_dir)
    }
}
