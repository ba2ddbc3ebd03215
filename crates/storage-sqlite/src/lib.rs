//! SQLite storage implementation for fundledger.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the key-value trait defined in `fundledger-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - The single-writer actor that serializes writes
//!
//! # Architecture
//!
//! ```text
//!   core (ledger, session)
//!            │
//!            ▼  KeyValueStoreTrait
//!   storage-sqlite (this crate)
//!            │
//!            ▼
//!        SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod kv;
pub mod schema;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use kv::SqliteKeyValueStore;

// Re-export from fundledger-core for convenience
pub use fundledger_core::errors::{DatabaseError, Error, Result};
