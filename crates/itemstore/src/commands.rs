//! Executes a parsed command against an [`ItemStore`].

use serde::Serialize;

use itemstore_core::item::{Item, ItemId};
use itemstore_core::storage::{create_with_fresh_id, CreatePolicy, ItemStore, Result};

use crate::cli::{Commands, DemoArgs};
use crate::scenario::{run_scenario, ScenarioConfig, ScenarioReport};

/// Result of one command, ready for formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum CommandOutput {
    Tables { tables: Vec<String> },
    Created { item: Item },
    Fetched { id: ItemId, item: Option<Item> },
    Updated { id: ItemId, payload: String },
    Deleted { id: ItemId, removed: Option<Item> },
    Demo { report: ScenarioReport },
}

/// Runs `command` against `store`.
pub async fn execute<S>(store: &S, command: Commands, policy: CreatePolicy) -> Result<CommandOutput>
where
    S: ItemStore + ?Sized,
{
    match command {
        Commands::Demo(DemoArgs {
            id,
            payload,
            updated_payload,
        }) => {
            let config = ScenarioConfig {
                id,
                payload,
                updated_payload,
                create_policy: policy,
            };
            let report = run_scenario(store, &config).await?;
            Ok(CommandOutput::Demo { report })
        }
        Commands::Tables => Ok(CommandOutput::Tables {
            tables: store.list_tables().await?,
        }),
        Commands::Create {
            id: Some(id),
            payload,
        } => {
            let item = Item::new(id, payload);
            store.create_item(&item).await?;
            Ok(CommandOutput::Created { item })
        }
        Commands::Create { id: None, payload } => {
            let item = create_with_fresh_id(store, &payload, policy).await?;
            Ok(CommandOutput::Created { item })
        }
        Commands::Get { id } => {
            let item = store.get_item(&id).await?;
            Ok(CommandOutput::Fetched { id, item })
        }
        Commands::Update { id, payload } => {
            let payload = store.update_item(&id, &payload).await?;
            Ok(CommandOutput::Updated { id, payload })
        }
        Commands::Delete { id } => {
            let removed = store.delete_item(&id).await?;
            Ok(CommandOutput::Deleted { id, removed })
        }
    }
}
