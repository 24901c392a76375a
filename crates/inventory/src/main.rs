use anyhow::{Context, Result};
use dotenv::dotenv;
use inventory::{handler::AppRouter, repository::Repositories, state::AppState};
use shared::{
    config::{Config, ConnectionManager, StorageBackend},
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _log_guard = init_logger("inventory", config.is_dev, config.enable_file_log);

    info!("⚙️ Storage backend: {}", config.storage);

    let repos = match config.storage {
        StorageBackend::Memory => Repositories::in_memory(),
        StorageBackend::Postgres => {
            let db = config
                .database
                .as_ref()
                .context("Postgres backend selected without database configuration")?;

            let pool = ConnectionManager::new_pool(&db.url, db.min_conn, db.max_conn)
                .await
                .context("Failed to connect to database")?;

            if db.run_migrations {
                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("Failed to run database migrations")?;
                info!("✅ Migrations applied");
            }

            Repositories::postgres(pool)
        }
    };

    AppRouter::serve(config.port, AppState::new(repos))
        .await
        .context("Failed to start server")?;

    Ok(())
}
