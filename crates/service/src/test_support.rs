#![cfg(test)]
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;

/// Fresh in-memory store with every migration applied.
///
/// Each call is isolated: the single pooled connection owns its own database.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_and_migrate(&DatabaseConfig::in_memory()).await?;
    Ok(db)
}
