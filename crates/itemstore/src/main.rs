//! itemstore CLI entry point.

use anstream::println as aprintln;
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use itemstore::cli::{Backend, Cli};
use itemstore::output::format_output;
use itemstore::storage::InMemoryStore;
use itemstore::{execute, CommandOutput, StoreConfig};
use itemstore_core::storage::{CreatePolicy, ItemStore, StoreError};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output on stdout stays parseable
    let default_filter = if cli.quiet {
        "itemstore=warn,itemstore_core=warn"
    } else {
        "itemstore=info,itemstore_core=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli.store_config(StoreConfig::from_env());
    config.validate().context("invalid configuration")?;
    let policy = config.create_policy()?;

    tracing::info!(destination = %config.target_display(), backend = ?cli.backend, "Starting");

    let output = match run(&cli, &config, policy).await {
        Ok(output) => output,
        Err(err) => {
            tracing::error!(kind = ?err.kind(), error = %err, "Operation failed");
            return Err(err.into());
        }
    };

    aprintln!("{}", format_output(&output, cli.format));
    Ok(())
}

async fn run(
    cli: &Cli,
    config: &StoreConfig,
    policy: CreatePolicy,
) -> Result<CommandOutput, StoreError> {
    let store = open_store(cli.backend, config).await?;
    execute(store.as_ref(), cli.command(), policy).await
}

async fn open_store(
    backend: Backend,
    config: &StoreConfig,
) -> Result<Box<dyn ItemStore>, StoreError> {
    match backend {
        Backend::Memory => Ok(Box::new(InMemoryStore::new(config.table_name.clone()))),
        #[cfg(feature = "dynamodb")]
        Backend::Dynamodb => {
            let store = itemstore::storage::DynamoDbStore::from_config(config).await?;
            Ok(Box::new(store))
        }
        #[cfg(not(feature = "dynamodb"))]
        Backend::Dynamodb => Err(StoreError::Configuration(
            "built without the dynamodb feature; use --backend memory".to_string(),
        )),
    }
}
