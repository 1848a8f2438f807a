//! In-memory user repository for development and tests

use async_trait::async_trait;
use common::error::DatabaseResult;
use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::RwLock;

use super::UserRepository;
use crate::models::User;

#[derive(Debug, Default)]
struct Store {
    users: BTreeMap<i64, User>,
    last_id: i64,
}

/// In-memory implementation of UserRepository
///
/// Ids are assigned sequentially starting at 1. Deleted users stay in the
/// map but are skipped by lookups.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users, deleted ones included
    pub async fn stored_count(&self) -> usize {
        self.store.read().await.users.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> DatabaseResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store
            .users
            .get(&id)
            .filter(|user| !user.is_deleted())
            .cloned())
    }

    async fn insert(&self, user: User) -> DatabaseResult<User> {
        let mut store = self.store.write().await;

        store.last_id += 1;
        let id = store.last_id;

        let user = user.with_id(id);
        store.users.insert(id, user.clone());
        tracing::debug!(user_id = id, "Inserted user");

        Ok(user)
    }

    async fn save(&self, user: User) -> DatabaseResult<Option<User>> {
        let Some(id) = user.id() else {
            return Ok(None);
        };

        let mut store = self.store.write().await;

        let live = store
            .users
            .get(&id)
            .is_some_and(|stored| !stored.is_deleted());
        if !live {
            tracing::debug!(user_id = id, "Skipped write to missing or deleted user");
            return Ok(None);
        }

        store.users.insert(id, user.clone());
        tracing::debug!(user_id = id, "Stored user");

        Ok(Some(user))
    }
}
