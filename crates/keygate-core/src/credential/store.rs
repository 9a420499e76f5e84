//! Credential store adapter
//!
//! Maps a login identifier to its password hash in the key-value store. The
//! identifier is used as the key verbatim.

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::types::DEFAULT_CREDENTIAL_TTL;
use crate::error::Result;
use crate::storage::KeyValueStore;

/// Credential store adapter
#[derive(Clone)]
pub struct CredentialStore {
    /// Storage backend
    store: Arc<dyn KeyValueStore>,
    /// Lifetime applied to every stored credential
    ttl: Duration,
}

impl CredentialStore {
    /// Create a credential store with the default 10 minute ttl
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            ttl: DEFAULT_CREDENTIAL_TTL,
        }
    }

    /// Override the credential ttl
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Credential ttl in effect
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fetch the stored hash for an identifier, `None` if there is none
    pub async fn get(&self, login_id: &str) -> Result<Option<String>> {
        self.store.get(login_id).await
    }

    /// Store a hash for an identifier, expiring after the configured ttl
    pub async fn set(&self, login_id: &str, password_hash: &str) -> Result<()> {
        self.store
            .set(login_id, password_hash, Some(self.ttl))
            .await?;

        debug!("Stored credential for {} (ttl {:?})", login_id, self.ttl);
        Ok(())
    }
}
