use sea_orm_migration::prelude::*;

/// Spin history (lives in the history database).
/// name / prize are snapshots, there is no foreign key back to customers.
#[derive(DeriveIden)]
enum History {
    Table,
    Id,
    Name,
    Prize,
    WonAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(History::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(History::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(History::Name).string().not_null())
                    .col(ColumnDef::new(History::Prize).string().not_null())
                    .col(
                        ColumnDef::new(History::WonAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(History::Table).to_owned())
            .await
    }
}
