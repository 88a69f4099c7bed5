//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};

use itemstore_core::item::{ItemId, TableName};

use crate::config::StoreConfig;
use crate::scenario::{DEFAULT_PAYLOAD, DEFAULT_UPDATED_PAYLOAD};

/// Create, read, update and delete single items in a DynamoDB table.
#[derive(Debug, Parser)]
#[command(name = "itemstore")]
#[command(version, about)]
#[command(long_about = "Create, read, update and delete single items in a DynamoDB table.

Without a subcommand, runs the demo: list tables, create an item under a
fresh identifier, read it back, update it, delete it.

Environment variables:
  AWS_PROFILE                    - Credential profile to use
  AWS_REGION                     - AWS region (defaults to ap-southeast-2)
  AWS_ENDPOINT_URL               - Use local DynamoDB (e.g., http://localhost:8000)
  ITEMSTORE_TABLE                - Table name (defaults to test)
  ITEMSTORE_MAX_CREATE_ATTEMPTS  - Identifiers tried on clash (defaults to 3)
  RUST_LOG                       - Log filter (defaults to itemstore=info)")]
pub struct Cli {
    /// Credential profile name.
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// AWS region.
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Custom endpoint URL, e.g. DynamoDB Local.
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Table to operate on.
    #[arg(long, global = true)]
    pub table: Option<String>,

    /// Identifiers tried by a generated-ID create before giving up.
    #[arg(long, global = true, value_name = "N")]
    pub max_create_attempts: Option<u32>,

    /// Storage backend.
    #[arg(long, global = true, value_enum, default_value_t = Backend::default())]
    pub backend: Backend,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    /// Only log warnings and errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Applies command-line overrides on top of `base`.
    pub fn store_config(&self, base: StoreConfig) -> StoreConfig {
        StoreConfig {
            profile: self.profile.clone().or(base.profile),
            region: self.region.clone().unwrap_or(base.region),
            endpoint_url: self.endpoint_url.clone().or(base.endpoint_url),
            table_name: self
                .table
                .clone()
                .map(TableName::new)
                .unwrap_or(base.table_name),
            max_create_attempts: self.max_create_attempts.unwrap_or(base.max_create_attempts),
        }
    }

    /// The subcommand to run, defaulting to the demo.
    pub fn command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Demo(DemoArgs::default()))
    }
}

/// Storage backend options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Amazon DynamoDB or a compatible endpoint.
    Dynamodb,
    /// Process-local map, discarded on exit.
    Memory,
}

impl Default for Backend {
    fn default() -> Self {
        if cfg!(feature = "dynamodb") {
            Self::Dynamodb
        } else {
            Self::Memory
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run list, create, get, update and delete in sequence.
    Demo(DemoArgs),
    /// List tables (first page only).
    Tables,
    /// Create an item, failing if the ID is taken.
    Create {
        /// Item ID. A random one is generated (and regenerated on clash) when omitted.
        #[arg(long, value_name = "ID")]
        id: Option<ItemId>,
        /// Item payload.
        payload: String,
    },
    /// Get an item by ID.
    Get {
        /// Item ID.
        id: ItemId,
    },
    /// Replace the payload of an existing item.
    Update {
        /// Item ID.
        id: ItemId,
        /// New payload.
        payload: String,
    },
    /// Delete an item by ID. Deleting a missing item succeeds.
    Delete {
        /// Item ID.
        id: ItemId,
    },
}

/// Arguments for the demo command.
#[derive(Debug, Clone, PartialEq, Eq, clap::Args)]
pub struct DemoArgs {
    /// Use this item ID instead of a generated one.
    #[arg(long, value_name = "ID")]
    pub id: Option<ItemId>,

    /// Payload written by the create step.
    #[arg(long, default_value = DEFAULT_PAYLOAD)]
    pub payload: String,

    /// Payload written by the update step.
    #[arg(long, default_value = DEFAULT_UPDATED_PAYLOAD)]
    pub updated_payload: String,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            id: None,
            payload: DEFAULT_PAYLOAD.to_string(),
            updated_payload: DEFAULT_UPDATED_PAYLOAD.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> StoreConfig {
        StoreConfig::from_lookup(|_| None)
    }

    #[test]
    fn test_no_subcommand_runs_demo() {
        let cli = Cli::try_parse_from(["itemstore"]).unwrap();
        assert_eq!(cli.command(), Commands::Demo(DemoArgs::default()));
        assert_eq!(cli.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "itemstore",
            "--profile",
            "devalias",
            "--region",
            "us-west-2",
            "--table",
            "items",
            "--max-create-attempts",
            "7",
            "tables",
        ])
        .unwrap();

        let config = cli.store_config(base_config());

        assert_eq!(config.profile.as_deref(), Some("devalias"));
        assert_eq!(config.region, "us-west-2");
        assert_eq!(config.table_name.as_str(), "items");
        assert_eq!(config.max_create_attempts, 7);
        assert_eq!(config.endpoint_url, None);
        assert_eq!(cli.command(), Commands::Tables);
    }

    #[test]
    fn test_missing_flags_keep_config() {
        let cli = Cli::try_parse_from(["itemstore", "tables"]).unwrap();
        assert_eq!(cli.store_config(base_config()), base_config());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["itemstore", "get", "abc-123", "--format", "json"]).unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(
            cli.command(),
            Commands::Get {
                id: ItemId::new("abc-123").unwrap()
            }
        );
    }

    #[test]
    fn test_create_with_and_without_id() {
        let cli = Cli::try_parse_from(["itemstore", "create", "Bar"]).unwrap();
        assert_eq!(
            cli.command(),
            Commands::Create {
                id: None,
                payload: "Bar".to_string()
            }
        );

        let cli = Cli::try_parse_from(["itemstore", "create", "--id", "abc-123", "Bar"]).unwrap();
        assert_eq!(
            cli.command(),
            Commands::Create {
                id: Some(ItemId::new("abc-123").unwrap()),
                payload: "Bar".to_string()
            }
        );
    }

    #[test]
    fn test_empty_id_is_rejected() {
        assert!(Cli::try_parse_from(["itemstore", "get", ""]).is_err());
    }

    #[test]
    fn test_memory_backend() {
        let cli = Cli::try_parse_from(["itemstore", "--backend", "memory"]).unwrap();
        assert_eq!(cli.backend, Backend::Memory);
    }
}
