//! Driving port for the user resource.
//!
//! Inbound adapters (HTTP handlers) use this port so they never import
//! outbound persistence concerns. Production backs it with
//! [`crate::domain::UserPersistenceService`].

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserChanges, UserId};

/// Domain use-case port for the user lifecycle.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Store a new user and return it with its generated identifier.
    async fn create(&self, user: NewUser) -> Result<User, Error>;

    /// Return every stored user.
    async fn find_all(&self) -> Result<Vec<User>, Error>;

    /// Return the matching user, or `None` when absent.
    async fn find_one(&self, id: UserId) -> Result<Option<User>, Error>;

    /// Apply a partial update. Missing users are a silent no-op.
    async fn update(&self, id: UserId, changes: UserChanges) -> Result<(), Error>;

    /// Delete a user. Missing users are a silent no-op.
    async fn remove(&self, id: UserId) -> Result<(), Error>;
}
