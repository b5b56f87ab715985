//! Storage layer for the courtside CLI
//!
//! A thin abstraction over the SQLite cache, organized into:
//! - `models`: persisted row shapes
//! - `schema`: database connection and schema management
//! - `queries`: CRUD operations and the snapshot swap used by sync

pub mod models;
pub mod queries;
pub mod schema;

// Re-export the main types and database struct for easy access
pub use models::*;
pub use queries::{META_DATA_POPULATED, META_LAST_SYNCED_AT};
pub use schema::LeagueDatabase;
