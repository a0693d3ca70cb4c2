//! User service entry-point: loads settings, wires persistence, and serves
//! the `/user` REST resource alongside health probes and OpenAPI docs.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, ServerSettings, create_server};
use user_service::inbound::http::health::HealthState;
use user_service::outbound::persistence::{DbPool, run_pending_migrations};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| io::Error::other(format!("failed to load settings: {err}")))?;

    let config = build_config(&settings).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}

async fn build_config(settings: &ServerSettings) -> io::Result<ServerConfig> {
    let config = ServerConfig::new(settings.bind_addr());

    let config = match settings.database_url() {
        Some(url) => {
            if settings.run_migrations {
                run_pending_migrations(url).await.map_err(io::Error::other)?;
            } else {
                info!("skipping database migrations");
            }
            let pool = DbPool::new(settings.pool_config(url))
                .await
                .map_err(io::Error::other)?;
            config.with_db_pool(pool)
        }
        None => config,
    };

    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(server::build_prometheus()?));

    Ok(config)
}
