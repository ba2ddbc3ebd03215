//! SQLite storage implementation for the key-value seam.

mod model;
mod repository;

pub use model::KvEntryDB;
pub use repository::SqliteKeyValueStore;

// Re-export trait from core for convenience
pub use fundledger_core::storage::KeyValueStoreTrait;
