//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`UserRepository`) are implemented by outbound adapters.
//! Driving ports (`UsersService`) are consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod user_repository;
mod users_service;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_service::MockUsersService;
pub use users_service::UsersService;
