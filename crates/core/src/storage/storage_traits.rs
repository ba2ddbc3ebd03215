use crate::errors::Result;
use async_trait::async_trait;

/// Durable key-value medium holding UTF-8 JSON documents.
///
/// Reads are synchronous; writes are awaited so that implementations can
/// route them through a single writer.
#[async_trait]
pub trait KeyValueStoreTrait: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    async fn put(&self, key: &str, value: &str) -> Result<()>;
    async fn delete(&self, key: &str) -> Result<()>;
}
