//! Forecast application handlers.
//!
//! Command handlers manage the stored profile (save, reset); query handlers
//! load it and run the pure cycle computations.

mod calendar;
mod get_profile;
mod predict;
mod reset_profile;
mod save_profile;

pub use calendar::{CalendarHandler, CalendarQuery};
pub use get_profile::{GetProfileHandler, GetProfileQuery};
pub use predict::{PredictHandler, PredictQuery, PredictResult};
pub use reset_profile::{ResetProfileCommand, ResetProfileHandler, ResetProfileResult};
pub use save_profile::{SaveProfileCommand, SaveProfileHandler, SaveProfileResult};

use crate::domain::cycle::CycleProfile;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ProfileStore;

/// Loads the stored profile, failing with `ProfileNotFound` when absent.
pub(crate) async fn require_profile(store: &dyn ProfileStore) -> Result<CycleProfile, DomainError> {
    store.load().await?.ok_or_else(|| {
        DomainError::new(
            ErrorCode::ProfileNotFound,
            "No cycle profile stored; complete onboarding first",
        )
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;

    use crate::domain::cycle::CycleProfile;
    use crate::ports::{ProfileStore, StorageError};

    /// Store whose every operation fails with an IO error.
    pub struct FailingProfileStore;

    #[async_trait]
    impl ProfileStore for FailingProfileStore {
        async fn save(&self, _profile: &CycleProfile) -> Result<(), StorageError> {
            Err(StorageError::Io("disk full".to_string()))
        }

        async fn load(&self) -> Result<Option<CycleProfile>, StorageError> {
            Err(StorageError::Io("disk unreadable".to_string()))
        }

        async fn clear(&self) -> Result<(), StorageError> {
            Err(StorageError::Io("read-only filesystem".to_string()))
        }
    }
}
