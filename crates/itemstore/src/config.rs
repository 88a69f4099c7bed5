use std::env;

use itemstore_core::item::TableName;
use itemstore_core::storage::{CreatePolicy, StoreError};

/// Region used when `AWS_REGION` is not set.
pub const DEFAULT_REGION: &str = "ap-southeast-2";

/// Client configuration, resolved once before any operation executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Named credential profile (default: SDK default chain)
    pub profile: Option<String>,
    /// AWS region (default: "ap-southeast-2")
    pub region: String,
    /// Custom endpoint URL, e.g. DynamoDB Local (default: none)
    pub endpoint_url: Option<String>,
    /// Target table (default: "test")
    pub table_name: TableName,
    /// Identifiers tried by a generated-ID create before giving up (default: 3)
    pub max_create_attempts: u32,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AWS_PROFILE` - Credential profile name
    /// - `AWS_REGION` - AWS region (default: "ap-southeast-2")
    /// - `AWS_ENDPOINT_URL` - Custom endpoint URL
    /// - `ITEMSTORE_TABLE` - Table name (default: "test")
    /// - `ITEMSTORE_MAX_CREATE_ATTEMPTS` - Create attempts on ID clash (default: 3)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`StoreConfig::from_env`] with variables taken from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            profile: non_empty("AWS_PROFILE"),
            region: non_empty("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            endpoint_url: non_empty("AWS_ENDPOINT_URL"),
            table_name: non_empty("ITEMSTORE_TABLE")
                .map(TableName::new)
                .unwrap_or_default(),
            max_create_attempts: lookup("ITEMSTORE_MAX_CREATE_ATTEMPTS")
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| CreatePolicy::default().max_attempts()),
        }
    }

    /// Rejects settings no request could succeed with.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.region.trim().is_empty() {
            return Err(StoreError::Configuration(
                "region must not be empty".to_string(),
            ));
        }
        if self.table_name.as_str().trim().is_empty() {
            return Err(StoreError::Configuration(
                "table name must not be empty".to_string(),
            ));
        }
        self.create_policy()?;
        Ok(())
    }

    pub fn create_policy(&self) -> Result<CreatePolicy, StoreError> {
        CreatePolicy::new(self.max_create_attempts)
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        let profile = self.profile.as_deref().unwrap_or("default");
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({}) table '{}'", url, self.table_name),
            None => format!(
                "AWS DynamoDB (region: {}, profile: {}) table '{}'",
                self.region, profile, self.table_name
            ),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
