use std::{
    cmp::Reverse,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::{info, warn};

use gestao_config::{Config, ConfigManager};
use gestao_core::{storage::snapshot_warnings, CoreError, DataProvider};
use gestao_domain::Snapshot;

const DATA_FILE: &str = "data.json";
const BACKUP_PREFIX: &str = "data";
const BACKUP_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

/// Describes a persisted snapshot backup.
#[derive(Debug, Clone)]
pub struct SnapshotBackup {
    pub id: String,
    pub created_at: Option<DateTime<Utc>>,
    pub size_bytes: u64,
    pub path: PathBuf,
}

/// Filesystem-backed JSON persistence for the restaurant records.
///
/// Layout under the root directory:
/// `data.json`, `backups/data_YYYYMMDD_HHMMSS[_note][_N].json`, and the
/// configuration files managed by [`ConfigManager`] under `config/`.
#[derive(Debug, Clone)]
pub struct JsonDataProvider {
    data_path: PathBuf,
    backups_dir: PathBuf,
    config: ConfigManager,
    retention: usize,
}

impl JsonDataProvider {
    pub fn new(root: PathBuf) -> Result<Self, CoreError> {
        Self::with_retention(root, DEFAULT_RETENTION)
    }

    pub fn with_retention(root: PathBuf, retention: usize) -> Result<Self, CoreError> {
        let backups_dir = root.join("backups");
        fs::create_dir_all(&backups_dir)?;
        let config = ConfigManager::with_base_dir(root.clone())?;
        Ok(Self {
            data_path: root.join(DATA_FILE),
            backups_dir,
            config,
            retention: retention.max(1),
        })
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn config_manager(&self) -> &ConfigManager {
        &self.config
    }

    /// Writes a copy of `snapshot` into the backups directory.
    pub fn backup_snapshot(
        &self,
        snapshot: &Snapshot,
        note: Option<&str>,
    ) -> Result<SnapshotBackup, CoreError> {
        let mut stem = format!(
            "{}_{}",
            BACKUP_PREFIX,
            Utc::now().format(BACKUP_TIMESTAMP_FORMAT)
        );
        if let Some(label) = sanitize_backup_note(note) {
            stem.push('_');
            stem.push_str(&label);
        }
        let (file_name, path) = self.unused_backup_path(&stem);
        let data = serialize_snapshot(snapshot)?;
        write_atomic(&path, &data)?;
        info!("snapshot backup written to {}", path.display());
        self.prune_backups()?;
        Ok(SnapshotBackup {
            created_at: parse_backup_timestamp(&file_name),
            id: file_name,
            size_bytes: data.len() as u64,
            path,
        })
    }

    /// Backups newest first.
    pub fn list_backups(&self) -> Result<Vec<SnapshotBackup>, CoreError> {
        if !self.backups_dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.backups_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(BACKUP_EXTENSION) {
                continue;
            }
            if let Some(file_name) = path.file_name().and_then(|name| name.to_str()) {
                let size_bytes = fs::metadata(&path).map(|meta| meta.len()).unwrap_or(0);
                entries.push(SnapshotBackup {
                    id: file_name.to_string(),
                    created_at: parse_backup_timestamp(file_name),
                    size_bytes,
                    path: path.clone(),
                });
            }
        }
        entries.sort_by(|a, b| {
            Reverse(a.created_at)
                .cmp(&Reverse(b.created_at))
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(entries)
    }

    /// Replaces the live data file with the backup and returns its contents.
    pub fn restore_backup(&self, backup: &SnapshotBackup) -> Result<Snapshot, CoreError> {
        if !backup.path.exists() {
            return Err(CoreError::Storage(format!(
                "backup `{}` not found",
                backup.id
            )));
        }
        let snapshot = load_snapshot_from_path(&backup.path)?;
        self.save_snapshot(&snapshot)?;
        Ok(snapshot)
    }

    fn backup_existing_file(&self) -> Result<(), CoreError> {
        if !self.data_path.exists() {
            return Ok(());
        }
        let stem = format!(
            "{}_{}",
            BACKUP_PREFIX,
            Utc::now().format(BACKUP_TIMESTAMP_FORMAT)
        );
        let (_, path) = self.unused_backup_path(&stem);
        fs::copy(&self.data_path, path)?;
        self.prune_backups()
    }

    /// First `<stem>[_N].json` not already present in the backups directory.
    fn unused_backup_path(&self, stem: &str) -> (String, PathBuf) {
        let mut file_name = format!("{}.{}", stem, BACKUP_EXTENSION);
        let mut attempt = 2;
        while self.backups_dir.join(&file_name).exists() {
            file_name = format!("{}_{}.{}", stem, attempt, BACKUP_EXTENSION);
            attempt += 1;
        }
        let path = self.backups_dir.join(&file_name);
        (file_name, path)
    }

    fn prune_backups(&self) -> Result<(), CoreError> {
        for entry in self.list_backups()?.into_iter().skip(self.retention) {
            let _ = fs::remove_file(entry.path);
        }
        Ok(())
    }
}

impl DataProvider for JsonDataProvider {
    /// A missing data file yields an empty snapshot.
    fn load_snapshot(&self) -> Result<Snapshot, CoreError> {
        if !self.data_path.exists() {
            return Ok(Snapshot::new());
        }
        let snapshot = load_snapshot_from_path(&self.data_path)?;
        for warning in snapshot_warnings(&snapshot) {
            warn!("{}", warning);
        }
        Ok(snapshot)
    }

    fn save_snapshot(&self, snapshot: &Snapshot) -> Result<(), CoreError> {
        self.backup_existing_file()?;
        save_snapshot_to_path(snapshot, &self.data_path)
    }

    fn load_config(&self) -> Result<Config, CoreError> {
        Ok(self.config.load()?)
    }

    fn save_config(&self, config: &Config) -> Result<(), CoreError> {
        Ok(self.config.save(config)?)
    }
}

/// Saves a snapshot to an arbitrary path on disk.
pub fn save_snapshot_to_path(snapshot: &Snapshot, path: &Path) -> Result<(), CoreError> {
    let tmp = tmp_path(path);
    write_atomic(&tmp, &serialize_snapshot(snapshot)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn load_snapshot_from_path(path: &Path) -> Result<Snapshot, CoreError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| {
        CoreError::Storage(format!("failed to parse {}: {}", path.display(), err))
    })
}

fn sanitize_backup_note(note: Option<&str>) -> Option<String> {
    let raw = note?.trim();
    let mut sanitized = String::new();
    let mut last_dash = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !sanitized.is_empty() && !last_dash {
            sanitized.push('-');
            last_dash = true;
        }
    }
    let trimmed = sanitized.trim_matches('-');
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_backup_timestamp(name: &str) -> Option<DateTime<Utc>> {
    let stem = name.strip_suffix(&format!(".{}", BACKUP_EXTENSION))?;
    let rest = stem.strip_prefix(&format!("{}_", BACKUP_PREFIX))?;
    let raw = rest.get(..15)?;
    NaiveDateTime::parse_from_str(raw, BACKUP_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

fn serialize_snapshot(snapshot: &Snapshot) -> Result<String, CoreError> {
    serde_json::to_string_pretty(snapshot).map_err(|err| CoreError::Storage(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backup_timestamp_reads_noted_names() {
        let parsed = parse_backup_timestamp("data_20250310_184512_fim-do-mes.json").unwrap();
        assert_eq!(
            parsed.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2025-03-10 18:45:12"
        );
        assert!(parse_backup_timestamp("data_20250310_184512_2.json").is_some());
        assert!(parse_backup_timestamp("settings_20250310_184512.json").is_none());
        assert!(parse_backup_timestamp("data_2025.json").is_none());
    }

    #[test]
    fn backup_note_is_slugged() {
        assert_eq!(
            sanitize_backup_note(Some("  Fim do Mês! ")),
            Some("fim-do-m-s".to_string())
        );
        assert_eq!(sanitize_backup_note(Some("***")), None);
        assert_eq!(sanitize_backup_note(None), None);
    }
}
