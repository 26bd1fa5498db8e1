//! In-Memory Profile Store Adapter
//!
//! Keeps the profile record in memory, encoded exactly as it would be in an
//! external key-value store. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::cycle::{CycleProfile, ProfileRecord};
use crate::ports::{ProfileStore, StorageError};

/// In-memory storage for the cycle profile
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    record: Arc<RwLock<Option<ProfileRecord>>>,
}

impl InMemoryProfileStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with a raw record (which may be invalid)
    pub fn with_record(record: ProfileRecord) -> Self {
        Self {
            record: Arc::new(RwLock::new(Some(record))),
        }
    }

    /// Raw record currently held, if any
    pub async fn record(&self) -> Option<ProfileRecord> {
        self.record.read().await.clone()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn save(&self, profile: &CycleProfile) -> Result<(), StorageError> {
        *self.record.write().await = Some(ProfileRecord::from(*profile));
        Ok(())
    }

    async fn load(&self) -> Result<Option<CycleProfile>, StorageError> {
        let record = self.record.read().await.clone();
        record
            .map(|r| CycleProfile::try_from(r).map_err(|e| StorageError::Corrupt(e.to_string())))
            .transpose()
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.record.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn test_profile() -> CycleProfile {
        CycleProfile::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 28, 5).unwrap()
    }

    #[tokio::test]
    async fn empty_store_loads_none() {
        let store = InMemoryProfileStore::new();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load() {
        let store = InMemoryProfileStore::new();
        store.save(&test_profile()).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(test_profile()));
        assert_eq!(
            store.record().await.unwrap().last_period_start,
            "2024-01-01"
        );
    }

    #[tokio::test]
    async fn save_replaces_previous_profile() {
        let store = InMemoryProfileStore::new();
        store.save(&test_profile()).await.unwrap();

        let updated =
            CycleProfile::new(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(), 30, 4).unwrap();
        store.save(&updated).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let store = InMemoryProfileStore::new();
        store.save(&test_profile()).await.unwrap();

        store.clear().await.unwrap();
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn invalid_record_is_reported_as_corrupt() {
        let store = InMemoryProfileStore::with_record(ProfileRecord {
            last_period_start: "2024-01-01".to_string(),
            cycle_length: 15,
            period_length: 5,
        });

        let result = store.load().await;
        assert!(matches!(result, Err(StorageError::Corrupt(_))));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = InMemoryProfileStore::new();
        let other = store.clone();
        store.save(&test_profile()).await.unwrap();

        assert!(other.load().await.unwrap().is_some());
    }
}
