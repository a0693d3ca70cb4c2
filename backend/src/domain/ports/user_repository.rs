//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{NewUser, User, UserChanges, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

/// Driven port over the user table.
///
/// Each method is a single round trip to the backing store. Mutations report
/// the number of affected rows and never fail because a row is missing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new row and return it with the store-assigned identifier.
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Return every stored user ordered by identifier.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Write the supplied fields onto the matching row.
    ///
    /// Callers must not pass an empty change set.
    async fn update(
        &self,
        id: UserId,
        changes: &UserChanges,
    ) -> Result<usize, UserPersistenceError>;

    /// Remove the matching row.
    async fn delete(&self, id: UserId) -> Result<usize, UserPersistenceError>;
}
