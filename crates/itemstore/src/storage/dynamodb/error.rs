//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `itemstore_core::storage`.
//! Transport failures are split off first; the remaining service errors go
//! through the per-operation `classify_*` functions.

use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::list_tables::ListTablesError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::update_item::UpdateItemError;
use itemstore_core::item::{ItemId, TableName};
use itemstore_core::storage::StoreError;

/// Map SDK failures that never reached the service.
fn map_transport_error<E, R>(err: &SdkError<E, R>) -> Option<StoreError>
where
    E: Error + 'static,
    R: Debug,
{
    match err {
        SdkError::ConstructionFailure(_) => Some(StoreError::Configuration(format!(
            "Request could not be built: {}",
            DisplayErrorContext(err)
        ))),
        SdkError::TimeoutError(_) => Some(StoreError::ConnectionFailed(format!(
            "Request timed out: {}",
            DisplayErrorContext(err)
        ))),
        SdkError::DispatchFailure(_) => Some(StoreError::ConnectionFailed(format!(
            "Request could not be sent: {}",
            DisplayErrorContext(err)
        ))),
        _ => None,
    }
}

/// Map a ListTables SDK error to StoreError.
pub fn map_list_tables_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ListTablesError, R>,
) -> StoreError {
    if let Some(mapped) = map_transport_error(&err) {
        return mapped;
    }
    classify_list_tables_error(err.into_service_error())
}

/// Map a ListTables service error to StoreError.
pub fn classify_list_tables_error(err: ListTablesError) -> StoreError {
    match err {
        ListTablesError::InvalidEndpointException(_) => {
            StoreError::Configuration("Invalid DynamoDB endpoint".to_string())
        }
        ListTablesError::InternalServerError(_) => {
            StoreError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::QueryFailed(format!("ListTables failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to StoreError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    table: &TableName,
    id: &ItemId,
) -> StoreError {
    if let Some(mapped) = map_transport_error(&err) {
        return mapped;
    }
    classify_put_item_error(err.into_service_error(), table, id)
}

/// Map a PutItem service error to StoreError.
pub fn classify_put_item_error(err: PutItemError, table: &TableName, id: &ItemId) -> StoreError {
    match err {
        PutItemError::ConditionalCheckFailedException(_) => StoreError::AlreadyExists {
            table: table.clone(),
            id: id.clone(),
        },
        PutItemError::ResourceNotFoundException(_) => {
            StoreError::QueryFailed(format!("Table not found: {}", table))
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            StoreError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            StoreError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            StoreError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            StoreError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a GetItem SDK error to StoreError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
    table: &TableName,
) -> StoreError {
    if let Some(mapped) = map_transport_error(&err) {
        return mapped;
    }
    classify_get_item_error(err.into_service_error(), table)
}

/// Map a GetItem service error to StoreError.
///
/// A missing item is not an error for GetItem; `ResourceNotFoundException`
/// only ever means the table is missing.
pub fn classify_get_item_error(err: GetItemError, table: &TableName) -> StoreError {
    match err {
        GetItemError::ResourceNotFoundException(_) => {
            StoreError::QueryFailed(format!("Table not found: {}", table))
        }
        GetItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            StoreError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            StoreError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::QueryFailed(format!("GetItem failed: {:?}", err)),
    }
}

/// Map an UpdateItem SDK error to StoreError.
pub fn map_update_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<UpdateItemError, R>,
    table: &TableName,
    id: &ItemId,
) -> StoreError {
    if let Some(mapped) = map_transport_error(&err) {
        return mapped;
    }
    classify_update_item_error(err.into_service_error(), table, id)
}

/// Map an UpdateItem service error to StoreError.
pub fn classify_update_item_error(
    err: UpdateItemError,
    table: &TableName,
    id: &ItemId,
) -> StoreError {
    match err {
        UpdateItemError::ConditionalCheckFailedException(_) => StoreError::NotFound {
            table: table.clone(),
            id: id.clone(),
        },
        UpdateItemError::ResourceNotFoundException(_) => {
            StoreError::QueryFailed(format!("Table not found: {}", table))
        }
        UpdateItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        UpdateItemError::RequestLimitExceeded(_) => {
            StoreError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        UpdateItemError::ItemCollectionSizeLimitExceededException(_) => {
            StoreError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        UpdateItemError::TransactionConflictException(_) => {
            StoreError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        UpdateItemError::InternalServerError(_) => {
            StoreError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::QueryFailed(format!("UpdateItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to StoreError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    table: &TableName,
) -> StoreError {
    if let Some(mapped) = map_transport_error(&err) {
        return mapped;
    }
    classify_delete_item_error(err.into_service_error(), table)
}

/// Map a DeleteItem service error to StoreError.
///
/// Deletes carry no condition, so there is no guard failure to map.
pub fn classify_delete_item_error(err: DeleteItemError, table: &TableName) -> StoreError {
    match err {
        DeleteItemError::ResourceNotFoundException(_) => {
            StoreError::QueryFailed(format!("Table not found: {}", table))
        }
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            StoreError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        DeleteItemError::ItemCollectionSizeLimitExceededException(_) => {
            StoreError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        DeleteItemError::TransactionConflictException(_) => {
            StoreError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        DeleteItemError::InternalServerError(_) => {
            StoreError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::QueryFailed(format!("DeleteItem failed: {:?}", err)),
    }
}
