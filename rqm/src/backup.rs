use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info, warn};

/// File name prefix shared by every backup
pub const BACKUP_PREFIX: &str = "requirements_";

/// Default number of backups kept by [`BackupManager::cleanup`]
pub const DEFAULT_MAX_BACKUPS: usize = 5;

/// A backup file found in the backup directory
#[derive(Debug, Clone)]
pub struct BackupEntry {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
    /// Birth time, or modification time where the platform has none
    pub created: SystemTime,
}

impl BackupEntry {
    /// Creation time formatted in local time
    pub fn created_display(&self) -> String {
        DateTime::<Local>::from(self.created)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}

/// Creates, lists and rotates timestamped backups of a requirements file
#[derive(Debug, Clone)]
pub struct BackupManager {
    dir: PathBuf,
}

impl BackupManager {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Copy `original` into the backup directory under a timestamped name
    pub fn create(&self, original: &Path, suffix: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create backup directory: {}", self.dir.display()))?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let path = self.unused_path(&timestamp, suffix);

        fs::copy(original, &path).with_context(|| {
            format!(
                "Failed to back up {} to {}",
                original.display(),
                path.display()
            )
        })?;

        info!(backup = %path.display(), "created backup");
        Ok(path)
    }

    /// Pick a backup path that does not exist yet
    fn unused_path(&self, timestamp: &str, suffix: &str) -> PathBuf {
        let mut path = self.dir.join(format!("{BACKUP_PREFIX}{timestamp}{suffix}"));
        let mut counter = 1;

        while path.exists() {
            path = self
                .dir
                .join(format!("{BACKUP_PREFIX}{timestamp}_{counter}{suffix}"));
            counter += 1;
        }

        path
    }

    /// All backups in the directory, sorted by file name
    pub fn list(&self) -> Result<Vec<BackupEntry>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read backup directory: {}", self.dir.display()))?;

        let mut backups = Vec::new();

        for entry in entries {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.starts_with(BACKUP_PREFIX) {
                continue;
            }

            let metadata = entry.metadata()?;
            if !metadata.is_file() {
                continue;
            }

            backups.push(BackupEntry {
                name,
                path: entry.path(),
                size: metadata.len(),
                created: creation_time(&metadata),
            });
        }

        backups.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(backups)
    }

    /// Keep the `max_backups` most recently created backups and delete the rest.
    /// Returns the removed paths.
    pub fn cleanup(&self, max_backups: usize) -> Result<Vec<PathBuf>> {
        let mut backups = self.list()?;

        // Newest first; timestamped names break ties
        backups.sort_by(|a, b| b.created.cmp(&a.created).then_with(|| b.name.cmp(&a.name)));

        debug!(
            found = backups.len(),
            keep = max_backups,
            "rotating backups"
        );

        let mut removed = Vec::new();

        for backup in backups.into_iter().skip(max_backups) {
            match fs::remove_file(&backup.path) {
                Ok(()) => {
                    info!(backup = %backup.name, "removed old backup");
                    removed.push(backup.path);
                }
                Err(e) => warn!(backup = %backup.name, error = %e, "could not remove old backup"),
            }
        }

        Ok(removed)
    }
}

fn creation_time(metadata: &Metadata) -> SystemTime {
    metadata
        .created()
        .or_else(|_| metadata.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}
