//! The list/create/get/update/delete walkthrough.
//!
//! Each step is one awaited round trip; the first failure stops the run and
//! is handed back to the caller.

use serde::Serialize;

use itemstore_core::item::{Item, ItemId};
use itemstore_core::storage::{create_with_fresh_id, CreatePolicy, ItemStore, Result};

/// Payload written by the create step.
pub const DEFAULT_PAYLOAD: &str = "Bar";

/// Payload written by the update step.
pub const DEFAULT_UPDATED_PAYLOAD: &str = "BARBARBAR";

/// Inputs for [`run_scenario`].
#[derive(Debug, Clone)]
pub struct ScenarioConfig {
    /// Use this identifier instead of generating one.
    pub id: Option<ItemId>,
    pub payload: String,
    pub updated_payload: String,
    pub create_policy: CreatePolicy,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            id: None,
            payload: DEFAULT_PAYLOAD.to_string(),
            updated_payload: DEFAULT_UPDATED_PAYLOAD.to_string(),
            create_policy: CreatePolicy::default(),
        }
    }
}

/// What each step returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    pub tables: Vec<String>,
    pub created: Item,
    pub fetched: Option<Item>,
    pub updated_payload: String,
    pub deleted: Option<Item>,
    pub after_delete: Option<Item>,
}

/// Runs the walkthrough against `store`.
pub async fn run_scenario<S>(store: &S, config: &ScenarioConfig) -> Result<ScenarioReport>
where
    S: ItemStore + ?Sized,
{
    let tables = store.list_tables().await?;
    tracing::info!(count = tables.len(), "Listed tables");

    let created = match &config.id {
        Some(id) => {
            let item = Item::new(id.clone(), config.payload.clone());
            store.create_item(&item).await?;
            item
        }
        None => create_with_fresh_id(store, &config.payload, config.create_policy).await?,
    };
    tracing::info!(id = %created.id, "Created item");

    let fetched = store.get_item(&created.id).await?;
    tracing::info!(id = %created.id, found = fetched.is_some(), "Fetched item");

    let updated_payload = store
        .update_item(&created.id, &config.updated_payload)
        .await?;
    tracing::info!(id = %created.id, payload = %updated_payload, "Updated item");

    let deleted = store.delete_item(&created.id).await?;
    tracing::info!(id = %created.id, removed = deleted.is_some(), "Deleted item");

    let after_delete = store.get_item(&created.id).await?;

    Ok(ScenarioReport {
        tables,
        created,
        fetched,
        updated_payload,
        deleted,
        after_delete,
    })
}

#[cfg(test)]
mod tests {
    use itemstore_core::storage::StoreError;

    use super::*;
    use crate::storage::InMemoryStore;

    #[tokio::test]
    async fn test_scenario_with_fixed_id() {
        let store = InMemoryStore::default();
        let id = ItemId::new("abc-123").unwrap();
        let config = ScenarioConfig {
            id: Some(id.clone()),
            ..Default::default()
        };

        let report = run_scenario(&store, &config).await.unwrap();

        assert_eq!(report.tables, vec!["test".to_string()]);
        assert_eq!(report.created, Item::new(id.clone(), "Bar"));
        assert_eq!(report.fetched, Some(Item::new(id.clone(), "Bar")));
        assert_eq!(report.updated_payload, "BARBARBAR");
        assert_eq!(report.deleted, Some(Item::new(id, "BARBARBAR")));
        assert_eq!(report.after_delete, None);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_scenario_with_generated_id() {
        let store = InMemoryStore::default();

        let report = run_scenario(&store, &ScenarioConfig::default())
            .await
            .unwrap();

        assert_eq!(report.created.id.as_str().len(), 36);
        assert_eq!(report.fetched.as_ref(), Some(&report.created));
        assert_eq!(report.after_delete, None);
    }

    #[tokio::test]
    async fn test_scenario_stops_on_taken_fixed_id() {
        let store = InMemoryStore::default();
        let id = ItemId::new("abc-123").unwrap();
        store
            .create_item(&Item::new(id.clone(), "existing"))
            .await
            .unwrap();
        let config = ScenarioConfig {
            id: Some(id.clone()),
            ..Default::default()
        };

        let err = run_scenario(&store, &config).await.unwrap_err();

        assert!(matches!(err, StoreError::AlreadyExists { .. }));
        assert_eq!(
            store.get_item(&id).await.unwrap(),
            Some(Item::new(id, "existing"))
        );
    }

    #[test]
    fn test_report_serializes() {
        let id = ItemId::new("abc-123").unwrap();
        let report = ScenarioReport {
            tables: vec!["test".to_string()],
            created: Item::new(id.clone(), "Bar"),
            fetched: Some(Item::new(id.clone(), "Bar")),
            updated_payload: "BARBARBAR".to_string(),
            deleted: Some(Item::new(id, "BARBARBAR")),
            after_delete: None,
        };

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["created"]["id"], "abc-123");
        assert_eq!(json["updated_payload"], "BARBARBAR");
        assert!(json["after_delete"].is_null());
    }
}
