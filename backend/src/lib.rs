//! User service library: a `/user` CRUD resource over a pluggable store.
//!
//! Layout follows ports and adapters: [`domain`] holds entities, ports and
//! the persistence service, [`inbound`] the HTTP adapter and [`outbound`]
//! the PostgreSQL and in-memory repositories.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
