use async_trait::async_trait;

use crate::item::{Item, ItemId, TableName};

use super::Result;

/// A remote (or local) key-value collection addressed by [`ItemId`].
///
/// Every method is a single stateless round trip.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// The collection this store reads and writes.
    fn table_name(&self) -> &TableName;

    /// Lists the collections visible to the caller. Only the first page is returned.
    async fn list_tables(&self) -> Result<Vec<String>>;

    /// Creates an item, failing with `AlreadyExists` if the ID is taken.
    async fn create_item(&self, item: &Item) -> Result<()>;

    /// Gets an item by its ID. A missing item is `Ok(None)`.
    async fn get_item(&self, id: &ItemId) -> Result<Option<Item>>;

    /// Replaces the payload of an existing item, failing with `NotFound` if
    /// there is none. Returns the payload as stored after the update.
    async fn update_item(&self, id: &ItemId, payload: &str) -> Result<String>;

    /// Deletes an item by its ID. Deleting a missing item succeeds.
    /// Returns the removed item, if there was one.
    async fn delete_item(&self, id: &ItemId) -> Result<Option<Item>>;
}
