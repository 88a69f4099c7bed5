use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use super::ItemIdError;

/// Largest partition key value DynamoDB accepts, in bytes.
pub const MAX_ITEM_ID_LEN: usize = 2048;

/// Table the client targets unless configured otherwise.
pub const DEFAULT_TABLE_NAME: &str = "test";

/// Primary key of an [`Item`].
///
/// Generated identifiers are random UUID v4 strings, but any non-empty string
/// up to [`MAX_ITEM_ID_LEN`] bytes is accepted so callers can address records
/// they did not create.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Creates an identifier from a caller-supplied string.
    pub fn new(id: impl Into<String>) -> Result<Self, ItemIdError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ItemIdError::Empty);
        }
        if id.len() > MAX_ITEM_ID_LEN {
            return Err(ItemIdError::TooLong {
                len: id.len(),
                max: MAX_ITEM_ID_LEN,
            });
        }
        Ok(Self(id))
    }

    /// Draws a fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for ItemId {
    type Err = ItemIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of the collection items are stored in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TableName(String);

impl TableName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TableName {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_NAME)
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single record: its identifier and a string payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub payload: String,
}

impl Item {
    pub fn new(id: ItemId, payload: impl Into<String>) -> Self {
        Self {
            id,
            payload: payload.into(),
        }
    }
}
