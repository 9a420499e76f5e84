//! Item store for CRUD operations

use std::sync::Arc;
use tracing::debug;

use super::types::Item;
use crate::error::Result;
use crate::storage::KeyValueStore;

/// Item store
#[derive(Clone)]
pub struct ItemStore {
    /// Storage backend
    store: Arc<dyn KeyValueStore>,
}

impl ItemStore {
    /// Create a new item store
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Store an item under its own id
    pub async fn create(&self, item: &Item) -> Result<()> {
        self.put(&item.id, &item.value).await
    }

    /// Get an item by id
    pub async fn get(&self, id: &str) -> Result<Option<Item>> {
        let value = self.store.get(id).await?;
        Ok(value.map(|value| Item::new(id, value)))
    }

    /// Store `value` under `id`, whether or not the id already exists
    pub async fn put(&self, id: &str, value: &str) -> Result<()> {
        self.store.set(id, value, None).await?;

        debug!("Stored item {}", id);
        Ok(())
    }

    /// Delete an item. Deleting a missing item succeeds.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete(id).await?;

        debug!("Deleted item {}", id);
        Ok(())
    }
}
