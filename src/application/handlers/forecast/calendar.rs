//! Calendar - Query handler for the classified 31-day window.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::cycle::CalendarWindow;
use crate::domain::foundation::DomainError;
use crate::ports::ProfileStore;

use super::require_profile;

/// Query for the window centered on a date.
#[derive(Debug, Clone)]
pub struct CalendarQuery {
    pub center: NaiveDate,
}

/// Handler for calendar windows against the stored profile.
pub struct CalendarHandler {
    store: Arc<dyn ProfileStore>,
}

impl CalendarHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: CalendarQuery) -> Result<CalendarWindow, DomainError> {
        let profile = require_profile(self.store.as_ref()).await?;
        Ok(CalendarWindow::around(profile, query.center)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryProfileStore;
    use crate::application::handlers::forecast::test_support::FailingProfileStore;
    use crate::domain::cycle::{CycleProfile, WINDOW_LEN};
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn builds_window_for_stored_profile() {
        let store = Arc::new(InMemoryProfileStore::new());
        store
            .save(&CycleProfile::with_defaults(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()))
            .await
            .unwrap();
        let handler = CalendarHandler::new(store);
        let center = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();

        let window = handler.handle(CalendarQuery { center }).await.unwrap();

        assert_eq!(window.center(), center);
        assert_eq!(window.days().len(), WINDOW_LEN);
        assert_eq!(window.month_label(), "January");
    }

    #[tokio::test]
    async fn storage_failure_is_reported() {
        let handler = CalendarHandler::new(Arc::new(FailingProfileStore));
        let center = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();

        let err = handler.handle(CalendarQuery { center }).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
    }

    #[tokio::test]
    async fn center_at_calendar_end_is_a_validation_error() {
        let store = Arc::new(InMemoryProfileStore::new());
        store
            .save(&CycleProfile::with_defaults(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()))
            .await
            .unwrap();
        let handler = CalendarHandler::new(store);

        let err = handler
            .handle(CalendarQuery { center: NaiveDate::MAX })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"center".to_string()));
    }
}
