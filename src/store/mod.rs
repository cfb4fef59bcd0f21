// src/store/mod.rs
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::models::TargetProfile;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to replace target file: {0}")]
    PersistError(#[from] tempfile::PersistError),

    #[error("Target not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

// On-disk shape of one target. Older files may omit the name, in which case
// the map key is used.
#[derive(Serialize, Deserialize)]
struct TargetRecord {
    #[serde(default)]
    name: Option<String>,
    min_uppers: usize,
    min_lowers: usize,
    min_digits: usize,
    length: usize,
}

impl TargetRecord {
    fn into_profile(self, key: &str) -> TargetProfile {
        TargetProfile {
            name: self.name.unwrap_or_else(|| key.to_string()),
            min_uppers: self.min_uppers,
            min_lowers: self.min_lowers,
            min_digits: self.min_digits,
            length: self.length,
        }
    }
}

impl From<&TargetProfile> for TargetRecord {
    fn from(profile: &TargetProfile) -> Self {
        Self {
            name: Some(profile.name.clone()),
            min_uppers: profile.min_uppers,
            min_lowers: profile.min_lowers,
            min_digits: profile.min_digits,
            length: profile.length,
        }
    }
}

type TargetMap = BTreeMap<String, TargetRecord>;

/// JSON file mapping target names to their requirement records.
pub struct TargetStore {
    path: PathBuf,
}

impl TargetStore {
    /// Open the store at `path`, creating an empty `{}` file when it is
    /// missing or too short to hold a JSON object.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { path: path.into() };

        match fs::metadata(&store.path) {
            Ok(metadata) if metadata.len() >= 2 => {}
            Ok(_) => {
                log::warn!("Target file {} is empty, resetting it", store.path.display());
                store.write_all(&TargetMap::new())?;
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if let Some(parent) = store.path.parent() {
                    if !parent.as_os_str().is_empty() && !parent.exists() {
                        fs::create_dir_all(parent)?;
                    }
                }
                store.write_all(&TargetMap::new())?;
                log::info!("Created target file {}", store.path.display());
            }
            Err(e) => return Err(e.into()),
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.read_all()?.contains_key(name))
    }

    pub fn load(&self, name: &str) -> Result<TargetProfile> {
        self.read_all()?
            .remove(name)
            .map(|record| record.into_profile(name))
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// Insert `profile`, replacing any record with the same name.
    pub fn add(&self, profile: &TargetProfile) -> Result<()> {
        let mut data = self.read_all()?;
        data.insert(profile.name.clone(), TargetRecord::from(profile));
        self.write_all(&data)?;
        log::info!("Saved target '{}'", profile.name);
        Ok(())
    }

    /// Replace the record of an existing target.
    pub fn update(&self, profile: &TargetProfile) -> Result<()> {
        let mut data = self.read_all()?;
        match data.get_mut(&profile.name) {
            Some(record) => *record = TargetRecord::from(profile),
            None => return Err(StoreError::NotFound(profile.name.clone())),
        }
        self.write_all(&data)?;
        log::info!("Updated requirements for '{}'", profile.name);
        Ok(())
    }

    /// Remove a target. Returns whether it was present.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let mut data = self.read_all()?;
        if data.remove(name).is_none() {
            return Ok(false);
        }
        self.write_all(&data)?;
        log::info!("Deleted target '{}'", name);
        Ok(true)
    }

    /// All targets, ordered by name.
    pub fn list(&self) -> Result<Vec<TargetProfile>> {
        Ok(self
            .read_all()?
            .into_iter()
            .map(|(key, record)| record.into_profile(&key))
            .collect())
    }

    fn read_all(&self) -> Result<TargetMap> {
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(TargetMap::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_all(&self, data: &TargetMap) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut serializer = serde_json::Serializer::with_formatter(&mut tmp, formatter);
            data.serialize(&mut serializer)?;
        }
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}
