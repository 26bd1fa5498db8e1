//! File-based Profile Store Adapter
//!
//! Stores the profile record as a JSON file named after the store key:
//! `{base_dir}/periodData.json`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::cycle::{CycleProfile, ProfileRecord};
use crate::ports::{ProfileStore, StorageError, PROFILE_KEY};

/// File-based storage for the cycle profile
#[derive(Debug, Clone)]
pub struct FileProfileStore {
    base_dir: PathBuf,
}

impl FileProfileStore {
    /// Create a new file store rooted at `base_dir`
    ///
    /// The directory is created on first save.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Full path of the profile file
    pub fn file_path(&self) -> PathBuf {
        self.base_dir.join(format!("{}.json", PROFILE_KEY))
    }

    async fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| StorageError::Io(format!("Failed to create directory: {}", e)))
    }
}

#[async_trait]
impl ProfileStore for FileProfileStore {
    async fn save(&self, profile: &CycleProfile) -> Result<(), StorageError> {
        self.ensure_dir().await?;

        let json = serde_json::to_string_pretty(&ProfileRecord::from(*profile))
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        // Write to a temporary file, then rename over the old record
        let file_path = self.file_path();
        let temp_path = file_path.with_extension("tmp");
        fs::write(&temp_path, json)
            .await
            .map_err(|e| StorageError::Io(format!("Failed to write temporary file: {}", e)))?;
        fs::rename(&temp_path, &file_path)
            .await
            .map_err(|e| StorageError::Io(format!("Failed to rename file: {}", e)))?;

        tracing::debug!(path = %file_path.display(), "Saved cycle profile");
        Ok(())
    }

    async fn load(&self) -> Result<Option<CycleProfile>, StorageError> {
        let file_path = self.file_path();

        let json = match fs::read_to_string(&file_path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Io(format!("Failed to read file: {}", e))),
        };

        let record: ProfileRecord =
            serde_json::from_str(&json).map_err(|e| StorageError::Corrupt(e.to_string()))?;
        let profile =
            CycleProfile::try_from(record).map_err(|e| StorageError::Corrupt(e.to_string()))?;

        Ok(Some(profile))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let file_path = self.file_path();

        match fs::remove_file(&file_path).await {
            Ok(()) => {
                tracing::debug!(path = %file_path.display(), "Removed cycle profile");
                Ok(())
            }
            // Not an error - idempotent delete
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(format!("Failed to delete file: {}", e))),
        }
    }
}
