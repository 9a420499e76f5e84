//! Service wiring
//!
//! Builds the login service and item store around a single shared
//! key-value store handle.

use std::sync::Arc;
use tracing::info;

use crate::credential::{CredentialStore, LoginService};
use crate::crypto::PasswordHashing;
use crate::error::Result;
use crate::item::ItemStore;
use crate::settings::{Settings, StoreBackend};
use crate::storage::{KeyValueStore, MemoryStore, RedisStore};

/// The services exposed over HTTP, sharing one store
#[derive(Clone)]
pub struct Keygate {
    /// Login orchestrator
    pub login: LoginService,
    /// Item CRUD
    pub items: ItemStore,
    /// Name of the backend in use
    backend: &'static str,
}

impl Keygate {
    /// Build services around an existing store
    pub fn new(store: Arc<dyn KeyValueStore>, settings: &Settings) -> Result<Self> {
        settings.validate()?;

        let backend = store.backend_name();
        let credentials = CredentialStore::new(store.clone()).with_ttl(settings.credential_ttl());
        let hashing = PasswordHashing::new(settings.hash)?;

        Ok(Self {
            login: LoginService::new(credentials, hashing),
            items: ItemStore::new(store),
            backend,
        })
    }

    /// Open the backend named in the settings and build services around it
    pub async fn connect(settings: &Settings) -> Result<Self> {
        let store: Arc<dyn KeyValueStore> = match settings.store {
            StoreBackend::Redis => Arc::new(RedisStore::connect(&settings.redis_url).await?),
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
        };

        info!("Using {} store", store.backend_name());
        Self::new(store, settings)
    }

    /// Name of the backend in use
    pub fn backend_name(&self) -> &'static str {
        self.backend
    }
}
