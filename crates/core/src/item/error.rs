use thiserror::Error;

/// Errors that can occur when constructing an item identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemIdError {
    #[error("Item ID must not be empty")]
    Empty,
    #[error("Item ID is {len} bytes, the maximum is {max}")]
    TooLong { len: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_error_empty_display() {
        assert_eq!(ItemIdError::Empty.to_string(), "Item ID must not be empty");
    }

    #[test]
    fn test_item_id_error_too_long_display() {
        let error = ItemIdError::TooLong {
            len: 4096,
            max: 2048,
        };
        assert_eq!(
            error.to_string(),
            "Item ID is 4096 bytes, the maximum is 2048"
        );
    }
}
