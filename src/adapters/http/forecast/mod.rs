//! HTTP adapter for the forecast module.
//!
//! This module exposes profile management, predictions and the calendar
//! window via REST endpoints. See [`routes::forecast_router`] for the list.

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::ForecastAppState;
pub use routes::forecast_router;
