//! Predict - Query handler for a single-date period prediction.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::cycle::{CyclePredictor, CycleProfile, PredictionResult};
use crate::domain::foundation::DomainError;
use crate::ports::ProfileStore;

use super::require_profile;

/// Query for the prediction on a given date.
#[derive(Debug, Clone)]
pub struct PredictQuery {
    pub date: NaiveDate,
}

/// Prediction together with the profile it was computed from.
#[derive(Debug, Clone)]
pub struct PredictResult {
    pub date: NaiveDate,
    pub profile: CycleProfile,
    pub prediction: PredictionResult,
    pub next_period_start: NaiveDate,
}

/// Handler for predictions against the stored profile.
pub struct PredictHandler {
    store: Arc<dyn ProfileStore>,
}

impl PredictHandler {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: PredictQuery) -> Result<PredictResult, DomainError> {
        let profile = require_profile(self.store.as_ref()).await?;
        let prediction = CyclePredictor::predict(&profile, query.date);
        let next_period_start = CyclePredictor::next_period_start(&profile, query.date)?;

        tracing::debug!(
            date = %query.date,
            will_have_period = prediction.will_have_period,
            confidence = ?prediction.confidence,
            "Computed prediction"
        );

        Ok(PredictResult {
            date: query.date,
            profile,
            prediction,
            next_period_start,
        })
    }
}
