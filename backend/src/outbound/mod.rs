//! Outbound adapters implementing domain ports against external systems.
//!
//! [`persistence`] talks to PostgreSQL through Diesel; [`memory`] keeps
//! users in process for development runs and tests.

pub mod memory;
pub mod persistence;
