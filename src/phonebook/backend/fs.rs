use super::StorageBackend;
use crate::error::{PhonebookError, Result};
use crate::model::Record;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PhonebookError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "contacts".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()))
    }
}

impl StorageBackend for FsBackend {
    fn load_records(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no contacts file yet");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(PhonebookError::Io)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let records: Vec<Record> =
            serde_json::from_str(&content).map_err(PhonebookError::Serialization)?;
        debug!(path = %self.path.display(), count = records.len(), "loaded contacts");
        Ok(records)
    }

    fn save_records(&self, records: &[Record]) -> Result<()> {
        self.ensure_parent_dir()?;

        let content = serde_json::to_string_pretty(records).map_err(PhonebookError::Serialization)?;

        let tmp_file = self.tmp_path();
        fs::write(&tmp_file, content).map_err(PhonebookError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(PhonebookError::Io(e));
        }

        debug!(path = %self.path.display(), count = records.len(), "saved contacts");
        Ok(())
    }
}
