//! Redis storage backend
//!
//! Holds one multiplexed connection opened at startup. The connection is
//! cloned per call; clones share the same underlying socket and are safe to
//! use from many tasks at once.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use std::time::Duration;
use tracing::{debug, info};

use super::traits::{effective_ttl, KeyValueStore};
use crate::error::Result;

/// Redis-backed key-value store
#[derive(Clone)]
pub struct RedisStore {
    connection: MultiplexedConnection,
}

impl RedisStore {
    /// Connect to the Redis server at `url` (e.g. `redis://127.0.0.1:6379/0`)
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)?;
        let connection = client.get_multiplexed_async_connection().await?;

        info!("Connected to Redis at {}", url);
        Ok(Self { connection })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(key).await?;

        if value.is_none() {
            debug!("Key not found: {}", key);
        }
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.connection.clone();

        match effective_ttl(ttl) {
            // SET EX takes whole seconds; round sub-second ttls up to one
            Some(ttl) => {
                let seconds = ttl.as_secs().max(1);
                conn.set_ex::<_, _, ()>(key, value, seconds).await?;
            }
            None => {
                conn.set::<_, _, ()>(key, value).await?;
            }
        }

        debug!("Stored key: {}", key);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.connection.clone();
        let removed: u64 = conn.del(key).await?;

        debug!("Deleted key: {} ({} removed)", key, removed);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
