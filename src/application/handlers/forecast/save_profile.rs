//! SaveProfile - Command handler for completing onboarding.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::cycle::CycleProfile;
use crate::domain::foundation::DomainError;
use crate::ports::{ProfileStore, StorageError};

/// Command to store a new cycle profile.
#[derive(Debug, Clone)]
pub struct SaveProfileCommand {
    pub last_period_start: NaiveDate,
    pub cycle_length: i64,
    pub period_length: i64,
}

/// Result of saving a profile.
#[derive(Debug, Clone)]
pub struct SaveProfileResult {
    pub profile: CycleProfile,
    /// True when an earlier profile was overwritten.
    pub replaced: bool,
}

/// Handler for saving profiles.
pub struct SaveProfileHandler {
    store: Arc<dyn ProfileStore>,
}

impl SaveProfileHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SaveProfileCommand) -> Result<SaveProfileResult, DomainError> {
        // 1. Validate before touching the store
        let profile = CycleProfile::new(cmd.last_period_start, cmd.cycle_length, cmd.period_length)?;

        // 2. Persist, replacing any previous profile (a corrupt one included)
        let replaced = match self.store.load().await {
            Ok(existing) => existing.is_some(),
            Err(StorageError::Corrupt(reason)) => {
                tracing::warn!(%reason, "Overwriting corrupt cycle profile");
                true
            }
            Err(e) => return Err(e.into()),
        };
        self.store.save(&profile).await?;

        tracing::info!(
            last_period_start = %profile.last_period_start(),
            cycle_length = profile.cycle_length().days(),
            period_length = profile.period_length().days(),
            replaced,
            "Cycle profile saved"
        );

        Ok(SaveProfileResult { profile, replaced })
    }
}
