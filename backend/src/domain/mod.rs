//! Domain primitives, ports, and services.
//!
//! Purpose: Define strongly typed domain entities used by the HTTP and
//! persistence adapters. Keep types transport agnostic and document
//! invariants in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — transport-agnostic failure payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - TraceId — request-scoped correlation identifier.
//! - User, UserId, NewUser, UserChanges — the user resource.
//! - UserPersistenceService — pass-through service over `UserRepository`.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, User, UserChanges, UserId, UserValidationError};
pub use self::user_service::UserPersistenceService;
