//! HTTP handlers for forecast endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::NaiveDate;

use crate::application::{
    CalendarHandler, CalendarQuery, GetProfileHandler, GetProfileQuery, PredictHandler,
    PredictQuery, ResetProfileCommand, ResetProfileHandler, SaveProfileCommand,
    SaveProfileHandler,
};
use crate::domain::foundation::{parse_calendar_date, DomainError, ErrorCode, ValidationError};
use crate::ports::ProfileStore;

use super::dto::{
    today, CalendarParams, CalendarResponse, ErrorResponse, HealthResponse, PredictionParams,
    PredictionResponse, ProfileResponse, SaveProfileRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct ForecastAppState {
    pub profile_store: Arc<dyn ProfileStore>,
}

impl ForecastAppState {
    pub fn new(profile_store: Arc<dyn ProfileStore>) -> Self {
        Self { profile_store }
    }

    pub fn save_profile_handler(&self) -> SaveProfileHandler {
        SaveProfileHandler::new(self.profile_store.clone())
    }

    pub fn reset_profile_handler(&self) -> ResetProfileHandler {
        ResetProfileHandler::new(self.profile_store.clone())
    }

    pub fn get_profile_handler(&self) -> GetProfileHandler {
        GetProfileHandler::new(self.profile_store.clone())
    }

    pub fn predict_handler(&self) -> PredictHandler {
        PredictHandler::new(self.profile_store.clone())
    }

    pub fn calendar_handler(&self) -> CalendarHandler {
        CalendarHandler::new(self.profile_store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// GET /api/profile - Read the stored profile
pub async fn get_profile(
    State(state): State<ForecastAppState>,
) -> Result<impl IntoResponse, ForecastApiError> {
    let profile = state.get_profile_handler().handle(GetProfileQuery).await?;
    Ok(Json(ProfileResponse::from(profile)))
}

/// PUT /api/profile - Store a new profile
pub async fn put_profile(
    State(state): State<ForecastAppState>,
    Json(request): Json<SaveProfileRequest>,
) -> Result<impl IntoResponse, ForecastApiError> {
    let cmd = SaveProfileCommand {
        last_period_start: parse_calendar_date("last_period_start", &request.last_period_start)?,
        cycle_length: request.cycle_length,
        period_length: request.period_length,
    };

    let result = state.save_profile_handler().handle(cmd).await?;
    let status = if result.replaced {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };

    Ok((status, Json(ProfileResponse::from(result.profile))))
}

/// DELETE /api/profile - Reset
pub async fn delete_profile(
    State(state): State<ForecastAppState>,
) -> Result<impl IntoResponse, ForecastApiError> {
    state
        .reset_profile_handler()
        .handle(ResetProfileCommand)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/prediction?date=YYYY-MM-DD
pub async fn get_prediction(
    State(state): State<ForecastAppState>,
    Query(params): Query<PredictionParams>,
) -> Result<impl IntoResponse, ForecastApiError> {
    let date = date_or_today("date", params.date.as_deref())?;
    let result = state.predict_handler().handle(PredictQuery { date }).await?;
    Ok(Json(PredictionResponse::from(result)))
}

/// GET /api/calendar?center=YYYY-MM-DD
pub async fn get_calendar(
    State(state): State<ForecastAppState>,
    Query(params): Query<CalendarParams>,
) -> Result<impl IntoResponse, ForecastApiError> {
    let center = date_or_today("center", params.center.as_deref())?;
    let window = state.calendar_handler().handle(CalendarQuery { center }).await?;
    Ok(Json(CalendarResponse::from(&window)))
}

fn date_or_today(field: &str, value: Option<&str>) -> Result<NaiveDate, ValidationError> {
    match value {
        Some(raw) if !raw.trim().is_empty() => parse_calendar_date(field, raw),
        _ => Ok(today()),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ForecastApiError {
    BadRequest { message: String, field: Option<String> },
    NotFound(String),
    Internal(String),
}

impl From<ValidationError> for ForecastApiError {
    fn from(err: ValidationError) -> Self {
        ForecastApiError::BadRequest {
            field: Some(err.field().to_string()),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ForecastApiError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ForecastApiError::BadRequest {
                field: err.details.get("field").cloned(),
                message: err.message,
            },
            ErrorCode::ProfileNotFound => ForecastApiError::NotFound(err.message),
            ErrorCode::StorageError | ErrorCode::InternalError => {
                tracing::error!(error = %err, "Forecast request failed");
                ForecastApiError::Internal(err.message)
            }
        }
    }
}

impl IntoResponse for ForecastApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ForecastApiError::BadRequest { message, field } => {
                let error = ErrorResponse::bad_request(message);
                let error = match field {
                    Some(field) => error.with_details(serde_json::json!({ "field": field })),
                    None => error,
                };
                (StatusCode::BAD_REQUEST, error)
            }
            ForecastApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg)),
            ForecastApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };

        (status, Json(error)).into_response()
    }
}
