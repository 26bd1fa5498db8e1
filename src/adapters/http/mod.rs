//! HTTP adapters - REST API implementations.

pub mod forecast;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use forecast::{forecast_router, ForecastAppState};

/// Full application router with request tracing and CORS applied.
pub fn app_router(state: ForecastAppState) -> Router {
    forecast_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
