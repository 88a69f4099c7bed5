//! In-memory item store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use itemstore_core::item::{Item, ItemId, TableName};
use itemstore_core::storage::{ItemStore, Result, StoreError};

/// In-memory storage backend for tests and offline runs.
///
/// Applies the same conditional guards as the DynamoDB backend. Data is not
/// persisted and is lost when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    table_name: TableName,
    items: Arc<RwLock<HashMap<ItemId, Item>>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(TableName::default())
    }
}

impl InMemoryStore {
    /// Creates a new empty store for the given table.
    pub fn new(table_name: TableName) -> Self {
        Self {
            table_name,
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of items currently stored.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemStore for InMemoryStore {
    fn table_name(&self) -> &TableName {
        &self.table_name
    }

    async fn list_tables(&self) -> Result<Vec<String>> {
        Ok(vec![self.table_name.to_string()])
    }

    async fn create_item(&self, item: &Item) -> Result<()> {
        let mut items = self.items.write().await;
        if items.contains_key(&item.id) {
            return Err(StoreError::AlreadyExists {
                table: self.table_name.clone(),
                id: item.id.clone(),
            });
        }
        items.insert(item.id.clone(), item.clone());
        Ok(())
    }

    async fn get_item(&self, id: &ItemId) -> Result<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(id).cloned())
    }

    async fn update_item(&self, id: &ItemId, payload: &str) -> Result<String> {
        let mut items = self.items.write().await;
        match items.get_mut(id) {
            Some(item) => {
                item.payload = payload.to_string();
                Ok(item.payload.clone())
            }
            None => Err(StoreError::NotFound {
                table: self.table_name.clone(),
                id: id.clone(),
            }),
        }
    }

    async fn delete_item(&self, id: &ItemId) -> Result<Option<Item>> {
        let mut items = self.items.write().await;
        Ok(items.remove(id))
    }
}
