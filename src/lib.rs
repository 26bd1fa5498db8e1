//! Period Forecast - Personal menstrual-cycle estimator
//!
//! Given the last period start, the average cycle length and the average
//! period length, this crate predicts whether a date falls within a period
//! window and classifies a 31-day calendar window around any date.
//!
//! The cycle math in [`domain::cycle`] is pure and synchronous; storage,
//! configuration and the HTTP API live in the outer layers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
