//! Route configuration for forecast endpoints.
//!
//! Configures Axum router with forecast-related routes.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    delete_profile, get_calendar, get_prediction, get_profile, health, put_profile,
    ForecastAppState,
};

/// Creates the forecast router with all endpoints.
///
/// Routes:
/// - `GET /health` - Liveness check
/// - `GET /api/profile` - Stored profile
/// - `PUT /api/profile` - Store a profile (onboarding)
/// - `DELETE /api/profile` - Reset
/// - `GET /api/prediction?date=YYYY-MM-DD` - Prediction for a date
/// - `GET /api/calendar?center=YYYY-MM-DD` - 31-day calendar window
pub fn forecast_router() -> Router<ForecastAppState> {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/profile",
            get(get_profile).put(put_profile).delete(delete_profile),
        )
        .route("/api/prediction", get(get_prediction))
        .route("/api/calendar", get(get_calendar))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryProfileStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = ForecastAppState::new(Arc::new(InMemoryProfileStore::new()));
        forecast_router().with_state(state)
    }

    #[tokio::test]
    async fn forecast_router_mounts_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn prediction_without_profile_is_not_found() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/prediction?date=2024-01-03")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_profile_is_no_content() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/profile")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
