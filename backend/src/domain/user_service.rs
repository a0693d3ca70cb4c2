//! User persistence service.
//!
//! Implements the [`UsersService`] driving port by forwarding each operation
//! to exactly one [`UserRepository`] primitive. The service owns no state
//! beyond the repository handle and adds no retries, caching, or
//! transactions.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersService};
use crate::domain::{Error, NewUser, User, UserChanges, UserId};

/// Pass-through service over a user repository.
pub struct UserPersistenceService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for UserPersistenceService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> UserPersistenceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> UsersService for UserPersistenceService<R>
where
    R: UserRepository + ?Sized,
{
    async fn create(&self, user: NewUser) -> Result<User, Error> {
        let created = self
            .repository
            .insert(&user)
            .await
            .map_err(map_persistence_error)?;
        info!(user_id = %created.id(), "user created");
        Ok(created)
    }

    async fn find_all(&self) -> Result<Vec<User>, Error> {
        self.repository.list().await.map_err(map_persistence_error)
    }

    async fn find_one(&self, id: UserId) -> Result<Option<User>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)
    }

    async fn update(&self, id: UserId, changes: UserChanges) -> Result<(), Error> {
        if changes.is_empty() {
            debug!(user_id = %id, "empty change set; skipping update");
            return Ok(());
        }
        let rows = self
            .repository
            .update(id, &changes)
            .await
            .map_err(map_persistence_error)?;
        debug!(user_id = %id, rows, "user update applied");
        Ok(())
    }

    async fn remove(&self, id: UserId) -> Result<(), Error> {
        let rows = self
            .repository
            .delete(id)
            .await
            .map_err(map_persistence_error)?;
        debug!(user_id = %id, rows, "user delete applied");
        Ok(())
    }
}
