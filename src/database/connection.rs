use crate::config::DatabaseConfig;
use crate::error::AppResult;
use migration::{CustomerMigrator, HistoryMigrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

pub type DbPool = DatabaseConnection;

/// The two stores used by the service. They share no transaction.
#[derive(Clone)]
pub struct Pools {
    pub customers: DbPool,
    pub history: DbPool,
}

pub async fn create_pool(url: &str, max_connections: u32) -> AppResult<DbPool> {
    let mut options = ConnectOptions::new(url.to_string());
    options.max_connections(max_connections).sqlx_logging(false);

    let pool = Database::connect(options).await?;
    Ok(pool)
}

pub async fn create_pools(config: &DatabaseConfig) -> AppResult<Pools> {
    Ok(Pools {
        customers: create_pool(&config.customers_url, config.max_connections).await?,
        history: create_pool(&config.history_url, config.max_connections).await?,
    })
}

pub async fn run_migrations(pools: &Pools) -> AppResult<()> {
    CustomerMigrator::up(&pools.customers, None).await?;
    HistoryMigrator::up(&pools.history, None).await?;
    Ok(())
}
