//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Profile stores (in-memory, JSON file)
//! - `http` - REST API

pub mod http;
pub mod storage;

pub use storage::{FileProfileStore, InMemoryProfileStore};
