//! Runs the tasktrack HTTP service.
//!
//! Configuration comes from the environment (optionally seeded from a
//! `.env` file); see [`tasktrack::config`] for the variables. Without
//! `DATABASE_URL` tasks are kept in memory.

use std::sync::Arc;

use mockable::DefaultClock;
use tasktrack::api::create_router;
use tasktrack::config::{AppConfig, ServerConfig, StorageConfig};
use tasktrack::server::Server;
use tasktrack::task::adapters::memory::InMemoryTaskRepository;
use tasktrack::task::adapters::postgres::{PostgresTaskRepository, run_migrations};
use tasktrack::task::ports::TaskRepository;
use tasktrack::task::services::TaskService;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let dotenv = dotenvy::dotenv();
    init_tracing();
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    let AppConfig { server, storage } = AppConfig::from_env()?;
    match storage {
        StorageConfig::Memory => {
            tracing::warn!("DATABASE_URL not set, tasks are kept in memory");
            serve(InMemoryTaskRepository::new(), server).await
        }
        StorageConfig::Postgres {
            database_url,
            pool_size,
        } => {
            let pool = PostgresTaskRepository::build_pool(&database_url, pool_size)?;
            let applied = run_migrations(&mut *pool.get()?)?;
            tracing::info!(applied, pool_size, "connected to PostgreSQL");
            serve(PostgresTaskRepository::new(pool), server).await
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tasktrack=debug,tower_http=debug,info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

async fn serve<R>(repository: R, config: ServerConfig) -> eyre::Result<()>
where
    R: TaskRepository + 'static,
{
    let service = TaskService::new(Arc::new(repository), Arc::new(DefaultClock));
    Server::new(config).run(create_router(service)).await?;
    Ok(())
}
