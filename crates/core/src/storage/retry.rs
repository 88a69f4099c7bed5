//! Bounded "new identifier on clash" retry for item creation.

use crate::item::{Item, ItemId};

use super::{ItemStore, Result, StoreError};

/// Default number of identifiers tried before giving up.
pub const DEFAULT_MAX_CREATE_ATTEMPTS: u32 = 3;

/// How many times a create may draw a new identifier after a clash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatePolicy {
    max_attempts: u32,
}

impl CreatePolicy {
    /// Creates a policy, rejecting zero attempts.
    pub fn new(max_attempts: u32) -> Result<Self> {
        if max_attempts == 0 {
            return Err(StoreError::Configuration(
                "max create attempts must be at least 1".to_string(),
            ));
        }
        Ok(Self { max_attempts })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for CreatePolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_CREATE_ATTEMPTS,
        }
    }
}

/// Creates an item under a freshly generated v4 identifier, drawing a new one
/// whenever the store reports a clash.
pub async fn create_with_fresh_id<S>(store: &S, payload: &str, policy: CreatePolicy) -> Result<Item>
where
    S: ItemStore + ?Sized,
{
    create_with_ids(store, payload, policy, ItemId::generate).await
}

/// Same as [`create_with_fresh_id`], with identifiers taken from `next_id`.
///
/// Only `AlreadyExists` is retried. Any other error is returned as is. When
/// every attempt clashes the last `AlreadyExists` is returned.
pub async fn create_with_ids<S, F>(
    store: &S,
    payload: &str,
    policy: CreatePolicy,
    mut next_id: F,
) -> Result<Item>
where
    S: ItemStore + ?Sized,
    F: FnMut() -> ItemId,
{
    let mut attempt = 1;
    loop {
        let item = Item::new(next_id(), payload);
        match store.create_item(&item).await {
            Ok(()) => return Ok(item),
            Err(err) if err.is_id_clash() && attempt < policy.max_attempts() => {
                tracing::warn!(
                    table = %store.table_name(),
                    id = %item.id,
                    attempt,
                    max_attempts = policy.max_attempts(),
                    "Item ID clashed, retrying with a new one"
                );
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::item::TableName;

    /// Store whose creates clash for a fixed set of IDs and fail outright
    /// for another.
    struct ScriptedStore {
        table: TableName,
        taken: HashSet<String>,
        broken: HashSet<String>,
        created: Mutex<Vec<Item>>,
        attempts: Mutex<u32>,
    }

    impl ScriptedStore {
        fn new(taken: &[&str], broken: &[&str]) -> Self {
            Self {
                table: TableName::default(),
                taken: taken.iter().map(|s| s.to_string()).collect(),
                broken: broken.iter().map(|s| s.to_string()).collect(),
                created: Mutex::new(Vec::new()),
                attempts: Mutex::new(0),
            }
        }

        fn attempts(&self) -> u32 {
            *self.attempts.lock().unwrap()
        }
    }

    #[async_trait]
    impl ItemStore for ScriptedStore {
        fn table_name(&self) -> &TableName {
            &self.table
        }

        async fn list_tables(&self) -> Result<Vec<String>> {
            Ok(vec![self.table.to_string()])
        }

        async fn create_item(&self, item: &Item) -> Result<()> {
            *self.attempts.lock().unwrap() += 1;
            if self.broken.contains(item.id.as_str()) {
                return Err(StoreError::ConnectionFailed("connection reset".to_string()));
            }
            if self.taken.contains(item.id.as_str()) {
                return Err(StoreError::AlreadyExists {
                    table: self.table.clone(),
                    id: item.id.clone(),
                });
            }
            self.created.lock().unwrap().push(item.clone());
            Ok(())
        }

        async fn get_item(&self, _id: &ItemId) -> Result<Option<Item>> {
            Ok(None)
        }

        async fn update_item(&self, id: &ItemId, _payload: &str) -> Result<String> {
            Err(StoreError::NotFound {
                table: self.table.clone(),
                id: id.clone(),
            })
        }

        async fn delete_item(&self, _id: &ItemId) -> Result<Option<Item>> {
            Ok(None)
        }
    }

    fn ids(list: &'static [&'static str]) -> impl FnMut() -> ItemId {
        let mut iter = list.iter();
        move || ItemId::new(*iter.next().unwrap()).unwrap()
    }

    #[test]
    fn test_policy_rejects_zero_attempts() {
        assert!(matches!(
            CreatePolicy::new(0),
            Err(StoreError::Configuration(_))
        ));
        assert_eq!(CreatePolicy::new(5).unwrap().max_attempts(), 5);
        assert_eq!(
            CreatePolicy::default().max_attempts(),
            DEFAULT_MAX_CREATE_ATTEMPTS
        );
    }

    #[tokio::test]
    async fn test_first_id_free_creates_once() {
        let store = ScriptedStore::new(&[], &[]);
        let item = create_with_ids(&store, "Bar", CreatePolicy::default(), ids(&["a"]))
            .await
            .unwrap();

        assert_eq!(item.id.as_str(), "a");
        assert_eq!(item.payload, "Bar");
        assert_eq!(store.attempts(), 1);
    }

    #[tokio::test]
    async fn test_clash_retries_with_next_id() {
        let store = ScriptedStore::new(&["a"], &[]);
        let item = create_with_ids(&store, "Bar", CreatePolicy::default(), ids(&["a", "b"]))
            .await
            .unwrap();

        assert_eq!(item.id.as_str(), "b");
        assert_eq!(store.attempts(), 2);
        assert_eq!(store.created.lock().unwrap().as_slice(), &[item]);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let store = ScriptedStore::new(&["a", "b", "c"], &[]);
        let policy = CreatePolicy::new(2).unwrap();
        let err = create_with_ids(&store, "Bar", policy, ids(&["a", "b", "c"]))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            StoreError::AlreadyExists {
                table: TableName::default(),
                id: ItemId::new("b").unwrap(),
            }
        );
        assert_eq!(store.attempts(), 2);
    }

    #[tokio::test]
    async fn test_other_errors_are_not_retried() {
        let store = ScriptedStore::new(&[], &["a"]);
        let err = create_with_ids(&store, "Bar", CreatePolicy::default(), ids(&["a", "b"]))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::ConnectionFailed(_)));
        assert_eq!(store.attempts(), 1);
    }

    #[tokio::test]
    async fn test_fresh_ids_are_generated() {
        let store = ScriptedStore::new(&[], &[]);
        let item = create_with_fresh_id(&store, "Bar", CreatePolicy::default())
            .await
            .unwrap();

        assert_eq!(item.id.as_str().len(), 36);
    }
}
