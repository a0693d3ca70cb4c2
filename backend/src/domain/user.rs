//! User data model.
//!
//! The user resource carries a storage-assigned integer identifier and two
//! required name fields. Types here know nothing about JSON or SQL; inbound
//! and outbound adapters translate them at the edges.

use std::fmt;
use std::str::FromStr;

/// Validation errors returned when parsing user components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The identifier was empty.
    #[error("user id must not be empty")]
    EmptyId,
    /// The identifier was not a base-10 integer within range.
    #[error("user id must be an integer")]
    InvalidId,
}

/// Storage-assigned user identifier.
///
/// Identifiers are never generated in process; they come from the backing
/// store's sequence and are immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw identifier returned by the store.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = UserValidationError;

    /// Parse a base-10 `i32`. A leading `+` is rejected; everything else
    /// follows `i32::from_str`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if s.starts_with('+') {
            return Err(UserValidationError::InvalidId);
        }
        s.parse::<i32>()
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }
}

/// Persisted user.
///
/// ## Invariants
/// - `id` uniquely identifies exactly one stored row.
/// - `name` and `last_name` are always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    last_name: String,
}

impl User {
    /// Build a user from stored components.
    pub fn new(id: UserId, name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            last_name: last_name.into(),
        }
    }

    /// Storage-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Given name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Family name, stored in the `last_name` column.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }
}

/// Payload for creating a user. Both fields are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    last_name: String,
}

impl NewUser {
    /// Build a create payload.
    pub fn new(name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_name: last_name.into(),
        }
    }

    /// Given name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Attach a storage-assigned identifier.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            last_name: self.last_name,
        }
    }
}

/// Partial update payload. Only `Some` fields are written.
///
/// # Examples
/// ```
/// use user_service::domain::UserChanges;
///
/// let changes = UserChanges::default().with_last_name("King");
/// assert_eq!(changes.name(), None);
/// assert_eq!(changes.last_name(), Some("King"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    name: Option<String>,
    last_name: Option<String>,
}

impl UserChanges {
    /// Build a change set from optional fields.
    pub fn new(name: Option<String>, last_name: Option<String>) -> Self {
        Self { name, last_name }
    }

    /// Replace the given name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the family name.
    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// New given name, if supplied.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// New family name, if supplied.
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// `true` when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.last_name.is_none()
    }

    /// Write the supplied fields onto `user`, leaving the rest untouched.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name.clone_from(name);
        }
        if let Some(last_name) = &self.last_name {
            user.last_name.clone_from(last_name);
        }
    }
}
