//! Profile Store Port - Interface for persisting the cycle profile.
//!
//! The profile lives in an external key-value store as a single
//! [`ProfileRecord`](crate::domain::cycle::ProfileRecord) under
//! [`PROFILE_KEY`]. The domain never touches the store directly.

use async_trait::async_trait;

use crate::domain::cycle::CycleProfile;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Key under which the profile record is stored.
pub const PROFILE_KEY: &str = "periodData";

/// Errors that can occur during profile storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize profile: {0}")]
    Serialization(String),

    /// The stored record exists but does not decode into a valid profile.
    #[error("Stored profile is corrupt: {0}")]
    Corrupt(String),
}

impl From<StorageError> for DomainError {
    fn from(err: StorageError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for persisting and loading the single cycle profile
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Persist the profile, replacing any previous one.
    async fn save(&self, profile: &CycleProfile) -> Result<(), StorageError>;

    /// Load the stored profile.
    ///
    /// # Returns
    /// `None` when onboarding has not completed or the profile was reset.
    ///
    /// # Errors
    /// `StorageError::Corrupt` if a record exists but fails validation.
    async fn load(&self) -> Result<Option<CycleProfile>, StorageError>;

    /// Remove the profile. Idempotent.
    async fn clear(&self) -> Result<(), StorageError>;
}
