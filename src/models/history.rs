use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::entities::history_entity;

/// Number of entries returned by the public history feed.
pub const HISTORY_LIMIT: u64 = 20;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HistoryEntryResponse {
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "Free Drink")]
    pub prize: String,
    pub won_at: DateTime<Utc>,
}

impl From<history_entity::Model> for HistoryEntryResponse {
    fn from(m: history_entity::Model) -> Self {
        HistoryEntryResponse {
            name: m.name,
            prize: m.prize,
            won_at: m.won_at,
        }
    }
}
