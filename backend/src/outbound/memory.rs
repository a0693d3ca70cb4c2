//! In-process `UserRepository` used when no database is configured.
//!
//! Identifiers are assigned from a counter starting at 1 and are never
//! reused after deletion, mirroring a PostgreSQL `SERIAL` column.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserChanges, UserId};

#[derive(Debug)]
struct Store {
    next_id: i32,
    rows: BTreeMap<UserId, User>,
}

/// Mutex-guarded map of users keyed by identifier.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, UserPersistenceError> {
        self.store
            .lock()
            .map_err(|_| UserPersistenceError::query("user store lock poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut store = self.lock()?;
        let id = UserId::new(store.next_id);
        store.next_id = store
            .next_id
            .checked_add(1)
            .ok_or_else(|| UserPersistenceError::query("user id sequence exhausted"))?;

        let created = user.clone().into_user(id);
        store.rows.insert(id, created.clone());
        Ok(created)
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let store = self.lock()?;
        Ok(store.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let store = self.lock()?;
        Ok(store.rows.get(&id).cloned())
    }

    async fn update(
        &self,
        id: UserId,
        changes: &UserChanges,
    ) -> Result<usize, UserPersistenceError> {
        let mut store = self.lock()?;
        Ok(store.rows.get_mut(&id).map_or(0, |user| {
            changes.apply_to(user);
            1
        }))
    }

    async fn delete(&self, id: UserId) -> Result<usize, UserPersistenceError> {
        let mut store = self.lock()?;
        Ok(usize::from(store.rows.remove(&id).is_some()))
    }
}
