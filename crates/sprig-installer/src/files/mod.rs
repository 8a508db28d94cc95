//! Conflict-aware file writes.
//!
//! Every write starts with a fresh conflict check against the file system;
//! the result is never cached because disk state can change between calls.
//! The decision table, in order: no conflict writes directly, `force`
//! overwrites, `backup` copies the existing file aside first, and with
//! neither flag a conflict hook picks the outcome per file (defaulting to
//! skip in non-interactive contexts).

use camino::{Utf8Path, Utf8PathBuf};
use chrono::Utc;
use tracing::debug;

use sprig_core::error::SprigError;

use crate::InstallerResult;

/// Caller-supplied conflict flags, derived from CLI options
#[derive(Debug, Clone, Copy, Default)]
pub struct WritePolicy {
    /// Overwrite existing files without asking
    pub force: bool,
    /// Back up existing files before overwriting
    pub backup: bool,
}

/// What the conflict hook may choose for a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictChoice {
    Skip,
    Backup,
    Overwrite,
}

/// Snapshot of the target path taken immediately before a write decision
#[derive(Debug, Clone, Default)]
pub struct ConflictCheck {
    pub exists: bool,
    pub is_directory: bool,
    pub size: Option<u64>,
    pub modified: Option<std::time::SystemTime>,
}

/// Per-file result of a managed write, reported individually to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// No file existed; written fresh
    Created,
    /// Existing file replaced in place
    Overwritten,
    /// Existing file copied to `backup_path`, then replaced
    BackedUp { backup_path: Utf8PathBuf },
    /// Existing file left untouched
    Skipped,
}

impl std::fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteOutcome::Created => write!(f, "created"),
            WriteOutcome::Overwritten => write!(f, "overwritten"),
            WriteOutcome::BackedUp { backup_path } => {
                write!(f, "backed up to {}", backup_path)
            }
            WriteOutcome::Skipped => write!(f, "skipped"),
        }
    }
}

type ConflictHook = Box<dyn Fn(&Utf8Path, &ConflictCheck) -> ConflictChoice + Send + Sync>;

/// Writer applying the skip/backup/overwrite policy per file
pub struct FileInstaller {
    resolve_conflict: ConflictHook,
}

impl Default for FileInstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl FileInstaller {
    /// Installer with the non-interactive default: conflicts are skipped
    /// unless the policy flags say otherwise
    pub fn new() -> Self {
        Self {
            resolve_conflict: Box::new(|_, _| ConflictChoice::Skip),
        }
    }

    /// Installer with a custom per-file conflict hook, e.g. an interactive
    /// prompt
    pub fn with_conflict_hook(hook: ConflictHook) -> Self {
        Self {
            resolve_conflict: hook,
        }
    }

    /// Inspect the target path without writing anything
    pub async fn check_conflict(&self, path: &Utf8Path) -> InstallerResult<ConflictCheck> {
        match tokio::fs::metadata(path).await {
            Ok(meta) => Ok(ConflictCheck {
                exists: true,
                is_directory: meta.is_dir(),
                size: Some(meta.len()),
                modified: meta.modified().ok(),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(ConflictCheck::default())
            }
            Err(e) => Err(SprigError::classify_io(path.as_str(), e)),
        }
    }

    /// Write `content` to `path` under the conflict policy, creating parent
    /// directories as needed, and report what happened to this file
    pub async fn write_managed(
        &self,
        path: &Utf8Path,
        content: &str,
        policy: WritePolicy,
    ) -> InstallerResult<WriteOutcome> {
        let check = self.check_conflict(path).await?;

        if !check.exists {
            self.write_file(path, content).await?;
            return Ok(WriteOutcome::Created);
        }

        // A directory at the target cannot be overwritten or backed up by
        // a path-scoped write
        if check.is_directory {
            return Err(SprigError::FileExists {
                path: path.to_string(),
            });
        }

        if policy.force {
            self.write_file(path, content).await?;
            return Ok(WriteOutcome::Overwritten);
        }

        if policy.backup {
            let backup_path = self.create_backup(path).await?;
            self.write_file(path, content).await?;
            return Ok(WriteOutcome::BackedUp { backup_path });
        }

        match (self.resolve_conflict)(path, &check) {
            ConflictChoice::Skip => Ok(WriteOutcome::Skipped),
            ConflictChoice::Backup => {
                let backup_path = self.create_backup(path).await?;
                self.write_file(path, content).await?;
                Ok(WriteOutcome::BackedUp { backup_path })
            }
            ConflictChoice::Overwrite => {
                self.write_file(path, content).await?;
                Ok(WriteOutcome::Overwritten)
            }
        }
    }

    /// Copy the existing file at `path` to a timestamped sibling
    pub async fn create_backup(&self, path: &Utf8Path) -> InstallerResult<Utf8PathBuf> {
        let timestamp = Utc::now()
            .to_rfc3339()
            .replace([':', '.'], "-");
        let backup_path = Utf8PathBuf::from(format!("{}.backup.{}", path, timestamp));

        debug!(%path, %backup_path, "backing up existing file");
        tokio::fs::copy(path, &backup_path)
            .await
            .map_err(|e| SprigError::classify_io(path.as_str(), e))?;

        Ok(backup_path)
    }

    /// Ensure `dir` exists, creating intermediate directories
    pub async fn ensure_directory(&self, dir: &Utf8Path) -> InstallerResult<()> {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| SprigError::classify_io(dir.as_str(), e))
    }

    async fn write_file(&self, path: &Utf8Path, content: &str) -> InstallerResult<()> {
        if let Some(parent) = path.parent() {
            self.ensure_directory(parent).await?;
        }

        tokio::fs::write(path, content)
            .await
            .map_err(|e| SprigError::classify_io(path.as_str(), e))
    }
}
