#![cfg(test)]
use tokio::sync::OnceCell;
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use configs::DatabaseConfig;
use models::db::connect_with_config;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Migrated connection from `DATABASE_URL`, or `None` when DB tests are off.
pub async fn get_db() -> Result<Option<DatabaseConnection>, anyhow::Error> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(None); }
    let mut cfg = DatabaseConfig::from_env();
    if cfg.url.trim().is_empty() { return Ok(None); }
    cfg.min_connections = 1;

    // Run migrations exactly once, with a throwaway connection
    let cfg_ref = &cfg;
    MIGRATED
        .get_or_try_init(|| async move {
            let db = connect_with_config(cfg_ref).await?;
            migration::Migrator::up(&db, None).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;

    Ok(Some(connect_with_config(&cfg).await?))
}
