//! Storage module - the key-value seam between domain services and persistence.

mod memory_store;
mod storage_traits;

pub use memory_store::InMemoryKeyValueStore;
pub use storage_traits::KeyValueStoreTrait;
