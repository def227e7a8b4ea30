use crate::entities::history_entity as history;
use crate::error::AppResult;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbBackend, EntityTrait, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

/// History ledger: append-only record of completed spins.
#[derive(Clone)]
pub struct HistoryService {
    pool: DatabaseConnection,
}

impl HistoryService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn append(&self, name: &str, prize_name: &str) -> AppResult<history::Model> {
        let entry = history::ActiveModel {
            name: Set(name.to_string()),
            prize: Set(prize_name.to_string()),
            won_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;
        Ok(entry)
    }

    /// Most recent entries first.
    pub async fn list_recent(&self, limit: u64) -> AppResult<Vec<history::Model>> {
        let list = history::Entity::find()
            .order_by_desc(history::Column::Id)
            .limit(limit)
            .all(&self.pool)
            .await?;
        Ok(list)
    }

    /// Clears the feed and restarts numbering at 1.
    pub async fn reset_all(&self) -> AppResult<u64> {
        let restart_sequence = match self.pool.get_database_backend() {
            DbBackend::Sqlite => "DELETE FROM sqlite_sequence WHERE name = 'history'",
            DbBackend::Postgres => "ALTER SEQUENCE history_id_seq RESTART WITH 1",
            DbBackend::MySql => "ALTER TABLE history AUTO_INCREMENT = 1",
        };

        let txn = self.pool.begin().await?;
        let result = history::Entity::delete_many().exec(&txn).await?;
        txn.execute_unprepared(restart_sequence).await?;
        txn.commit().await?;

        log::warn!("History reset, {} entries removed", result.rows_affected);
        Ok(result.rows_affected)
    }
}
