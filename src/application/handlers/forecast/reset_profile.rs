//! ResetProfile - Command handler for discarding the stored profile.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::ports::ProfileStore;

/// Command to reset the profile.
#[derive(Debug, Clone, Default)]
pub struct ResetProfileCommand;

/// Result of a reset.
#[derive(Debug, Clone)]
pub struct ResetProfileResult {
    /// False when there was nothing to remove.
    pub had_profile: bool,
}

/// Handler for resetting profiles.
pub struct ResetProfileHandler {
    store: Arc<dyn ProfileStore>,
}

impl ResetProfileHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _cmd: ResetProfileCommand) -> Result<ResetProfileResult, DomainError> {
        // A corrupt record still counts as something to remove
        let had_profile = !matches!(self.store.load().await, Ok(None));
        self.store.clear().await?;

        tracing::info!(had_profile, "Cycle profile reset");

        Ok(ResetProfileResult { had_profile })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryProfileStore;
    use crate::application::handlers::forecast::test_support::FailingProfileStore;
    use crate::domain::cycle::{CycleProfile, ProfileRecord};
    use crate::domain::foundation::ErrorCode;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn reset_removes_profile() {
        let store = Arc::new(InMemoryProfileStore::new());
        store
            .save(&CycleProfile::with_defaults(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()))
            .await
            .unwrap();
        let handler = ResetProfileHandler::new(store.clone());

        let result = handler.handle(ResetProfileCommand).await.unwrap();

        assert!(result.had_profile);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn reset_without_profile_is_ok() {
        let handler = ResetProfileHandler::new(Arc::new(InMemoryProfileStore::new()));

        let result = handler.handle(ResetProfileCommand).await.unwrap();
        assert!(!result.had_profile);
    }

    #[tokio::test]
    async fn reset_clears_corrupt_record() {
        let store = Arc::new(InMemoryProfileStore::with_record(ProfileRecord {
            last_period_start: "garbage".to_string(),
            cycle_length: 28,
            period_length: 5,
        }));
        let handler = ResetProfileHandler::new(store.clone());

        let result = handler.handle(ResetProfileCommand).await.unwrap();

        assert!(result.had_profile);
        assert!(store.record().await.is_none());
    }

    #[tokio::test]
    async fn reset_surfaces_storage_failure() {
        let handler = ResetProfileHandler::new(Arc::new(FailingProfileStore));

        let err = handler.handle(ResetProfileCommand).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
