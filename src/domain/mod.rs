//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, date helpers, errors)
//! - `cycle` - Cycle profile, period prediction and calendar classification

pub mod cycle;
pub mod foundation;
