//! GetProfile - Query handler for the stored profile.

use std::sync::Arc;

use crate::domain::cycle::CycleProfile;
use crate::domain::foundation::DomainError;
use crate::ports::ProfileStore;

use super::require_profile;

/// Query for the stored profile.
#[derive(Debug, Clone, Default)]
pub struct GetProfileQuery;

/// Handler for reading the stored profile.
pub struct GetProfileHandler {
    store: Arc<dyn ProfileStore>,
}

impl GetProfileHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, _query: GetProfileQuery) -> Result<CycleProfile, DomainError> {
        require_profile(self.store.as_ref()).await
    }
}
