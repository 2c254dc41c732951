//! Colegio HTTP Server Binary
//!
//! Loads configuration, builds the repository (optionally seeded), sets up
//! the HTTP router and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: in-memory repository on 0.0.0.0:8080
//! cargo run --bin colegio-server
//!
//! # Seeded, on another port
//! SEED_FILE=backend/data/seed.toml PORT=3000 cargo run --bin colegio-server
//! ```
//!
//! Settings come from `colegio.toml` (see [`colegio_backend::config`]) and the
//! `HOST`, `PORT`, `RUST_LOG`, `REPOSITORY_TYPE` and `SEED_FILE` variables.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use colegio_backend::config::AppConfig;
use colegio_backend::db::RepositoryFactory;
use colegio_backend::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = AppConfig::from_default_location().context("loading configuration")?;
    config
        .apply_env_overrides()
        .context("applying environment overrides")?;

    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_new(&config.server.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Colegio HTTP Server");

    let repo_type = config.repository_type()?;
    let repository = RepositoryFactory::create(repo_type, config.repository.seed_file.as_deref())
        .await
        .context("initializing repository")?;
    info!("Repository initialized ({:?})", repo_type);

    let app = create_router(AppState::new(repository));

    let addr = config.bind_addr()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
