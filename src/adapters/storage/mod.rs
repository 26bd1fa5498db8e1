//! Storage Adapters
//!
//! Implementations of the ProfileStore port.
//!
//! ## Available Adapters
//!
//! - **FileProfileStore** - Stores the profile record as a JSON file
//! - **InMemoryProfileStore** - Stores the profile record in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileProfileStore, InMemoryProfileStore};
//!
//! // Production: file-based storage
//! let store = FileProfileStore::new("./data");
//!
//! // Testing: in-memory storage
//! let store = InMemoryProfileStore::new();
//! ```

mod file_profile_store;
mod in_memory_profile_store;

pub use file_profile_store::FileProfileStore;
pub use in_memory_profile_store::InMemoryProfileStore;
