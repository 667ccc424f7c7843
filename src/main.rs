use thiserror::Error;
use tracing_subscriber::EnvFilter;

use finaid::adapters::{api_router, in_memory_repositories, postgres, with_middleware};
use finaid::application::Services;
use finaid::config::{AppConfig, ConfigError, StorageBackend, ValidationError};
use finaid::ports::Repositories;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let repositories = build_repositories(&config).await?;
    let services = Services::new(&repositories, config.storage.delete_policy);
    let app = with_middleware(api_router(services), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, backend = ?config.storage.backend, "finaid listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if config.is_production() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn build_repositories(config: &AppConfig) -> Result<Repositories, StartupError> {
    match config.storage.backend {
        StorageBackend::Memory => Ok(in_memory_repositories()),
        StorageBackend::Postgres => {
            let pool = postgres::connect(&config.database).await?;
            if config.database.run_migrations {
                postgres::run_migrations(&pool).await?;
                tracing::info!("migrations applied");
            }
            Ok(postgres::postgres_repositories(pool))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
