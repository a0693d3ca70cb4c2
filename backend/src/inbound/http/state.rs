//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::UserPersistenceService;
use crate::domain::ports::{UserRepository, UsersService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Driving port for the user resource.
    pub users: Arc<dyn UsersService>,
}

impl HttpState {
    /// Construct state from an explicit users service.
    pub fn new(users: Arc<dyn UsersService>) -> Self {
        Self { users }
    }

    /// Wire the persistence service over the given repository.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use user_service::inbound::http::state::HttpState;
    /// use user_service::outbound::memory::InMemoryUserRepository;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryUserRepository::new()));
    /// # let _ = state;
    /// ```
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: UserRepository + 'static,
    {
        Self::new(Arc::new(UserPersistenceService::new(repository)))
    }
}
