use thiserror::Error;

use crate::item::{ItemId, ItemIdError, TableName};

/// Errors that can occur during item store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Item already exists in {table}: {id}")]
    AlreadyExists { table: TableName, id: ItemId },
    #[error("Item not found in {table}: {id}")]
    NotFound { table: TableName, id: ItemId },
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl StoreError {
    /// True when a create was rejected because the identifier is taken.
    pub fn is_id_clash(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}

impl From<ItemIdError> for StoreError {
    fn from(err: ItemIdError) -> Self {
        Self::InvalidData(err.to_string())
    }
}

/// Result type for item store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
