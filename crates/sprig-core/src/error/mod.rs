//! Error types and result aliases for Sprig operations.
//!
//! Provides a unified error type that covers all error conditions across
//! the Sprig crates, with actionable remediation suggestions and a small
//! context map surfaced alongside each failure.

use thiserror::Error;

use crate::types::VersionConflict;

/// Unified error type for all Sprig operations
#[derive(Error, Debug)]
pub enum SprigError {
    // Command errors
    #[error("Invalid command: {reason}")]
    InvalidCommand { reason: String },

    // Registry errors
    #[error("Component '{name}' not found in registry")]
    ComponentNotFound { name: String },

    #[error("Network error: {message}{}", format_attempts(.attempts))]
    Network {
        message: String,
        /// Set once the retry budget is exhausted
        attempts: Option<u32>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Configuration errors
    #[error("Configuration field '{field}' is invalid: {reason}")]
    ConfigValidation { field: String, reason: String },

    #[error("Project is not initialized: {reason}")]
    InvalidProject { reason: String },

    #[error("Failed to parse JSON: {message}")]
    JsonParse { message: String },

    // Dependency errors
    #[error("Circular dependency detected at component '{component}'")]
    CircularDependency { component: String },

    #[error("npm version conflicts block the install: {}", format_conflicts(.conflicts))]
    DependencyConflict { conflicts: Vec<VersionConflict> },

    #[error("Failed to install npm packages [{}]: {reason}", .packages.join(", "))]
    MissingDependency { packages: Vec<String>, reason: String },

    // File system errors
    #[error("File already exists: {path}")]
    FileExists { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for Sprig operations
pub type SprigResult<T> = Result<T, SprigError>;

fn format_attempts(attempts: &Option<u32>) -> String {
    match attempts {
        Some(n) => format!(" (after {} attempts)", n),
        None => String::new(),
    }
}

fn format_conflicts(conflicts: &[VersionConflict]) -> String {
    conflicts
        .iter()
        .map(|c| format!("{} (installed {}, required {})", c.name, c.installed, c.required))
        .collect::<Vec<_>>()
        .join(", ")
}

impl SprigError {
    /// Create a network error from any error type
    pub fn network<E>(message: String, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message,
            attempts: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create the terminal network error after exhausting the retry budget
    pub fn network_exhausted<E>(message: String, attempts: u32, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message,
            attempts: Some(attempts),
            source: Some(Box::new(source)),
        }
    }

    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Classify an IO error at `path` into the typed taxonomy.
    ///
    /// Access-denied and already-exists signals get their own variants so
    /// the CLI can attach targeted remediation hints; anything else falls
    /// back to the generic `Io` variant.
    pub fn classify_io(path: &str, source: std::io::Error) -> Self {
        use std::io::ErrorKind;
        match source.kind() {
            ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_string(),
            },
            ErrorKind::AlreadyExists => Self::FileExists {
                path: path.to_string(),
            },
            ErrorKind::NotFound => Self::Io {
                message: format!("Path not found: {}", path),
                source,
            },
            _ => Self::Io {
                message: format!("File system error at {}", path),
                source,
            },
        }
    }

    /// Check if this error is recoverable by retrying the operation
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SprigError::Network { .. } | SprigError::Io { .. })
    }

    /// User-facing remediation suggestions, in display order
    pub fn suggestions(&self) -> &'static [&'static str] {
        match self {
            SprigError::InvalidCommand { .. } => &[
                "Run 'sprig --help' to see available commands",
                "Pass at least one component name to 'sprig add'",
            ],
            SprigError::ComponentNotFound { .. } => &[
                "Check the component name spelling",
                "Run 'sprig list' to see available components",
            ],
            SprigError::Network { .. } => &[
                "Check your internet connection and try again",
                "Verify the registry URL is reachable",
            ],
            SprigError::ConfigValidation { .. } => &[
                "Fix the named field in sprig.json",
            ],
            SprigError::InvalidProject { .. } => &[
                "Run 'sprig init' to create a sprig.json in this directory",
                "Make sure you are in the project root",
            ],
            SprigError::JsonParse { .. } => &[
                "Check the file for syntax errors",
            ],
            SprigError::CircularDependency { .. } => &[
                "Report the cycle to the registry maintainers",
            ],
            SprigError::DependencyConflict { .. } => &[
                "Re-run with --force to install despite the conflicts",
                "Update the conflicting packages in package.json first",
            ],
            SprigError::MissingDependency { .. } => &[
                "Check that npm is installed and on your PATH",
                "Run the printed npm command manually to see the full output",
            ],
            SprigError::FileExists { .. } => &[
                "Re-run with --force to overwrite",
                "Re-run with --backup to keep a copy of the existing file",
            ],
            SprigError::PermissionDenied { .. } => &[
                "Check the permissions on the target directory",
            ],
            SprigError::Io { .. } => &[
                "Check disk space and directory permissions",
            ],
        }
    }

    /// Non-sensitive context fields for error reporting
    pub fn context(&self) -> Vec<(&'static str, String)> {
        match self {
            SprigError::ComponentNotFound { name } => vec![("component", name.clone())],
            SprigError::Network { attempts, .. } => attempts
                .map(|n| vec![("attempts", n.to_string())])
                .unwrap_or_default(),
            SprigError::ConfigValidation { field, .. } => vec![("field", field.clone())],
            SprigError::CircularDependency { component } => {
                vec![("component", component.clone())]
            }
            SprigError::DependencyConflict { conflicts } => vec![(
                "conflicts",
                conflicts
                    .iter()
                    .map(|c| c.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            )],
            SprigError::MissingDependency { packages, .. } => {
                vec![("packages", packages.join(", "))]
            }
            SprigError::FileExists { path } | SprigError::PermissionDenied { path } => {
                vec![("path", path.clone())]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_permission_denied() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SprigError::classify_io("/etc/app.tsx", io);
        assert!(matches!(err, SprigError::PermissionDenied { .. }));
    }

    #[test]
    fn test_classify_already_exists() {
        let io = std::io::Error::new(std::io::ErrorKind::AlreadyExists, "exists");
        let err = SprigError::classify_io("src/button.tsx", io);
        assert!(matches!(err, SprigError::FileExists { .. }));
    }

    #[test]
    fn test_classify_fallback_is_io() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = SprigError::classify_io("src/button.tsx", io);
        assert!(matches!(err, SprigError::Io { .. }));
    }

    #[test]
    fn test_every_variant_has_suggestions() {
        let err = SprigError::ComponentNotFound {
            name: "button".to_string(),
        };
        assert!(!err.suggestions().is_empty());

        let err = SprigError::Network {
            message: "timed out".to_string(),
            attempts: Some(3),
            source: None,
        };
        assert!(!err.suggestions().is_empty());
        assert_eq!(err.context(), vec![("attempts", "3".to_string())]);
    }

    #[test]
    fn test_conflict_display_lists_packages() {
        let err = SprigError::DependencyConflict {
            conflicts: vec![crate::types::VersionConflict {
                name: "existing-dep".to_string(),
                installed: "1.0.0".to_string(),
                required: "2.0.0".to_string(),
            }],
        };
        let rendered = err.to_string();
        assert!(rendered.contains("existing-dep"));
        assert!(rendered.contains("1.0.0"));
        assert!(rendered.contains("2.0.0"));
    }
}
