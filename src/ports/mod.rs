//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProfileStore` - Persistence of the cycle profile record

mod profile_store;

pub use profile_store::{ProfileStore, StorageError, PROFILE_KEY};
