use crate::error::{PhonebookError, Result};
use crate::store::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "phonebook.json";
const DEFAULT_CONTACTS_FILE: &str = "contacts.json";

/// Configuration for the phonebook, read from `phonebook.json` in the working directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    /// Where contacts are persisted, relative to the working directory unless absolute
    #[serde(default = "default_contacts_file")]
    pub contacts_file: PathBuf,

    /// How many contacts `show all` prints per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_contacts_file() -> PathBuf {
    PathBuf::from(DEFAULT_CONTACTS_FILE)
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for PhonebookConfig {
    fn default() -> Self {
        Self {
            contacts_file: default_contacts_file(),
            page_size: default_page_size(),
        }
    }
}

impl PhonebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PhonebookError::Io)?;
        let config: PhonebookConfig =
            serde_json::from_str(&content).map_err(PhonebookError::Serialization)?;
        Ok(config)
    }

    /// The contacts file resolved against `base_dir`.
    pub fn contacts_path<P: AsRef<Path>>(&self, base_dir: P) -> PathBuf {
        if self.contacts_file.is_absolute() {
            self.contacts_file.clone()
        } else {
            base_dir.as_ref().join(&self.contacts_file)
        }
    }

    /// Page size, never zero.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}
