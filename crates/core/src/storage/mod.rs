mod error;
mod kind;
mod retry;
mod traits;

pub use error::{Result, StoreError};
pub use kind::{error_kind, ErrorKind};
pub use retry::{create_with_fresh_id, create_with_ids, CreatePolicy};
pub use traits::ItemStore;
