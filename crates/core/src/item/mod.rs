mod error;
mod types;

pub use error::ItemIdError;
pub use types::{Item, ItemId, TableName, DEFAULT_TABLE_NAME, MAX_ITEM_ID_LEN};
