use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// One completed spin.
/// name / prize are copies taken at spin time, so an entry outlives the
/// customer record and any later change to the prize table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub prize: String,
    pub won_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
