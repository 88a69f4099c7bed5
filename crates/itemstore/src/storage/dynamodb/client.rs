//! AWS SDK client setup.

use aws_sdk_dynamodb::Client;
use itemstore_core::storage::Result;

use crate::config::StoreConfig;

/// Creates a DynamoDB client with the given configuration.
///
/// The profile and region come from `config` rather than process-wide
/// environment. Credentials are resolved lazily by the SDK on the first
/// request.
pub async fn create_client(config: &StoreConfig) -> Result<Client> {
    config.validate()?;

    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(profile) = &config.profile {
        sdk_config_loader = sdk_config_loader.profile_name(profile);
    }

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    tracing::debug!(
        region = %config.region,
        profile = config.profile.as_deref().unwrap_or("default"),
        endpoint = config.endpoint_url.as_deref().unwrap_or("aws"),
        "DynamoDB client configured"
    );

    Ok(Client::new(&sdk_config))
}
