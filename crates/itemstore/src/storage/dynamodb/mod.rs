//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of [`ItemStore`]
//! using `aws-sdk-dynamodb`.
//!
//! [`ItemStore`]: itemstore_core::storage::ItemStore

mod client;
mod conversions;
mod error;
mod keys;
mod repository;

pub use client::create_client;
pub use repository::DynamoDbStore;
