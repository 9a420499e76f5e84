//! Storage trait definitions

use std::time::Duration;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for key-value store backends
///
/// Credentials and items share a single keyspace; no prefixing is applied by
/// callers.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Retrieve a value by key, `None` if absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value with the given key
    ///
    /// A `ttl` of `None` (or zero) stores the value without expiration.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()>;

    /// Delete a value by key. Deleting a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Get a human-readable name for this storage backend
    fn backend_name(&self) -> &'static str;
}

/// Normalize a ttl so that zero means "no expiration"
pub(crate) fn effective_ttl(ttl: Option<Duration>) -> Option<Duration> {
    ttl.filter(|ttl| !ttl.is_zero())
}
