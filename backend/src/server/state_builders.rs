//! Builder for the HTTP state from server configuration.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use user_service::inbound::http::state::HttpState;
use user_service::outbound::memory::InMemoryUserRepository;
use user_service::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

/// Select the repository adapter: Diesel when a pool is configured,
/// otherwise the in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL user repository");
            HttpState::from_repository(Arc::new(DieselUserRepository::new(pool.clone())))
        }
        None => {
            warn!("no database configured; users are kept in memory and lost on restart");
            HttpState::from_repository(Arc::new(InMemoryUserRepository::new()))
        }
    };
    web::Data::new(state)
}
