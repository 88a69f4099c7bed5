//! DynamoDB item store implementation.
//!
//! Implements [`ItemStore`] from `itemstore_core::storage` using DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use itemstore_core::item::{Item, ItemId, TableName};
use itemstore_core::storage::{ItemStore, Result};

use super::client::create_client;
use super::conversions::{
    attributes_to_item, item_to_attributes, key_attributes, removed_item, updated_payload,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_list_tables_error, map_put_item_error,
    map_update_item_error,
};
use super::keys;
use crate::config::StoreConfig;

/// DynamoDB-backed item store.
pub struct DynamoDbStore {
    client: Client,
    table_name: TableName,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: TableName) -> Self {
        Self { client, table_name }
    }

    /// Creates a new store from explicit configuration.
    pub async fn from_config(config: &StoreConfig) -> Result<Self> {
        let client = create_client(config).await?;
        Ok(Self::new(client, config.table_name.clone()))
    }
}

#[async_trait]
impl ItemStore for DynamoDbStore {
    fn table_name(&self) -> &TableName {
        &self.table_name
    }

    async fn list_tables(&self) -> Result<Vec<String>> {
        tracing::debug!("ListTables");

        let result = self
            .client
            .list_tables()
            .send()
            .await
            .map_err(map_list_tables_error)?;

        if let Some(last) = result.last_evaluated_table_name() {
            tracing::debug!(
                last_evaluated = last,
                "More tables available, not paginating"
            );
        }

        Ok(result.table_names().to_vec())
    }

    async fn create_item(&self, item: &Item) -> Result<()> {
        tracing::debug!(table = %self.table_name, id = %item.id, "PutItem");

        self.client
            .put_item()
            .table_name(self.table_name.as_str())
            .set_item(Some(item_to_attributes(item)))
            .condition_expression(keys::ITEM_ABSENT_CONDITION)
            .send()
            .await
            .map_err(|e| map_put_item_error(e, &self.table_name, &item.id))?;

        Ok(())
    }

    async fn get_item(&self, id: &ItemId) -> Result<Option<Item>> {
        tracing::debug!(table = %self.table_name, %id, "GetItem");

        let result = self
            .client
            .get_item()
            .table_name(self.table_name.as_str())
            .set_key(Some(key_attributes(id)))
            .consistent_read(true)
            .send()
            .await
            .map_err(|e| map_get_item_error(e, &self.table_name))?;

        match result.item {
            Some(item) => Ok(Some(attributes_to_item(&item)?)),
            None => Ok(None),
        }
    }

    async fn update_item(&self, id: &ItemId, payload: &str) -> Result<String> {
        tracing::debug!(table = %self.table_name, %id, "UpdateItem");

        let result = self
            .client
            .update_item()
            .table_name(self.table_name.as_str())
            .set_key(Some(key_attributes(id)))
            .update_expression(keys::UPDATE_PAYLOAD_EXPRESSION)
            .expression_attribute_values(
                keys::PAYLOAD_PLACEHOLDER,
                AttributeValue::S(payload.to_string()),
            )
            .condition_expression(keys::ITEM_EXISTS_CONDITION)
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(|e| map_update_item_error(e, &self.table_name, id))?;

        updated_payload(result.attributes.as_ref())
    }

    async fn delete_item(&self, id: &ItemId) -> Result<Option<Item>> {
        tracing::debug!(table = %self.table_name, %id, "DeleteItem");

        let result = self
            .client
            .delete_item()
            .table_name(self.table_name.as_str())
            .set_key(Some(key_attributes(id)))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, &self.table_name))?;

        Ok(removed_item(id, result.attributes.as_ref()))
    }
}
