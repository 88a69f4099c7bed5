//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! [`Item`]. These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use itemstore_core::item::{Item, ItemId};
use itemstore_core::storage::StoreError;

use super::keys::{ID_ATTRIBUTE, PAYLOAD_ATTRIBUTE};

/// Convert an Item to a DynamoDB item.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    let mut attributes = key_attributes(&item.id);
    attributes.insert(
        PAYLOAD_ATTRIBUTE.to_string(),
        AttributeValue::S(item.payload.clone()),
    );
    attributes
}

/// Convert a DynamoDB item to an Item.
pub fn attributes_to_item(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<Item, StoreError> {
    let id = ItemId::new(get_string(attributes, ID_ATTRIBUTE)?)?;
    Ok(Item {
        id,
        payload: get_string(attributes, PAYLOAD_ATTRIBUTE)?,
    })
}

/// Primary-key map addressing a single item.
pub fn key_attributes(id: &ItemId) -> HashMap<String, AttributeValue> {
    let mut key = HashMap::new();
    key.insert(ID_ATTRIBUTE.to_string(), AttributeValue::S(id.to_string()));
    key
}

/// Extract the payload from an `UPDATED_NEW` response.
pub fn updated_payload(
    attributes: Option<&HashMap<String, AttributeValue>>,
) -> Result<String, StoreError> {
    match attributes {
        Some(attributes) => get_string(attributes, PAYLOAD_ATTRIBUTE),
        None => Err(StoreError::InvalidData(
            "UpdateItem returned no attributes".to_string(),
        )),
    }
}

/// Convert an `ALL_OLD` response into the removed item, if any.
///
/// The delete has already happened by the time this runs, so an old record
/// that doesn't decode is logged and reported as `None` rather than failing.
pub fn removed_item(
    id: &ItemId,
    attributes: Option<&HashMap<String, AttributeValue>>,
) -> Option<Item> {
    let attributes = attributes.filter(|a| !a.is_empty())?;
    match attributes_to_item(attributes) {
        Ok(item) => Some(item),
        Err(err) => {
            tracing::warn!(%id, error = %err, "Deleted item could not be decoded");
            None
        }
    }
}

/// Get a required string attribute.
fn get_string(item: &HashMap<String, AttributeValue>, key: &str) -> Result<String, StoreError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| StoreError::InvalidData(format!("Missing or invalid field: {}", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> Item {
        Item::new(ItemId::new("abc-123").unwrap(), "Bar")
    }

    #[test]
    fn test_item_attributes_use_wire_names() {
        let attributes = item_to_attributes(&sample_item());

        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.get("id").unwrap().as_s().unwrap(), "abc-123");
        assert_eq!(attributes.get("foo").unwrap().as_s().unwrap(), "Bar");
    }

    #[test]
    fn test_attributes_to_item() {
        let attributes = HashMap::from([
            ("id".to_string(), AttributeValue::S("abc-123".to_string())),
            ("foo".to_string(), AttributeValue::S("Bar".to_string())),
        ]);

        assert_eq!(attributes_to_item(&attributes).unwrap(), sample_item());
    }

    #[test]
    fn test_attributes_to_item_missing_payload() {
        let attributes = key_attributes(&sample_item().id);

        assert_eq!(
            attributes_to_item(&attributes).unwrap_err(),
            StoreError::InvalidData("Missing or invalid field: foo".to_string())
        );
    }

    #[test]
    fn test_attributes_to_item_wrong_type() {
        let attributes = HashMap::from([
            ("id".to_string(), AttributeValue::N("42".to_string())),
            ("foo".to_string(), AttributeValue::S("Bar".to_string())),
        ]);

        assert!(attributes_to_item(&attributes).is_err());
    }

    #[test]
    fn test_key_attributes_only_contains_partition_key() {
        let key = key_attributes(&sample_item().id);

        assert_eq!(key.len(), 1);
        assert_eq!(key.get("id").unwrap().as_s().unwrap(), "abc-123");
    }

    #[test]
    fn test_updated_payload() {
        let attributes = HashMap::from([(
            "foo".to_string(),
            AttributeValue::S("BARBARBAR".to_string()),
        )]);

        assert_eq!(updated_payload(Some(&attributes)).unwrap(), "BARBARBAR");
        assert!(updated_payload(None).is_err());
    }

    #[test]
    fn test_removed_item() {
        let item = sample_item();
        let attributes = item_to_attributes(&item);

        let removed = removed_item(&item.id, Some(&attributes));

        assert_eq!(removed, Some(item.clone()));
        assert_eq!(removed_item(&item.id, Some(&HashMap::new())), None);
        assert_eq!(removed_item(&item.id, None), None);
    }

    #[test]
    fn test_removed_item_without_payload_is_not_an_error() {
        let id = ItemId::new("abc-123").unwrap();
        let old_record = key_attributes(&id);

        assert_eq!(removed_item(&id, Some(&old_record)), None);
    }
}
