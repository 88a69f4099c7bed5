//! Attribute names and expressions used on the wire.
//!
//! The table has a single string partition key, `id`, and keeps the payload
//! in `foo`.

/// Partition key attribute.
pub const ID_ATTRIBUTE: &str = "id";

/// Payload attribute.
pub const PAYLOAD_ATTRIBUTE: &str = "foo";

/// Guard for creates: don't overwrite an existing item.
pub const ITEM_ABSENT_CONDITION: &str = "attribute_not_exists(id)";

/// Guard for updates: don't create an item that doesn't exist.
pub const ITEM_EXISTS_CONDITION: &str = "attribute_exists(id)";

/// Placeholder for the new payload in [`UPDATE_PAYLOAD_EXPRESSION`].
pub const PAYLOAD_PLACEHOLDER: &str = ":r";

/// Sets the payload attribute to [`PAYLOAD_PLACEHOLDER`].
pub const UPDATE_PAYLOAD_EXPRESSION: &str = "SET foo = :r";
