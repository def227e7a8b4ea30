use sea_orm_migration::prelude::*;

/// Customer ledger (lives in the customers database)
#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
    Name,
    Code,
    Status,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

/// status: 0 = pending, 1 = approved, 2 = used
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::Name).string().not_null())
                    .col(
                        ColumnDef::new(Customers::Code)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Customers::Status)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Customers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .to_owned(),
            )
            .await?;

        // admin listings filter by status and sort by creation time
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_customers_status_created_at")
                    .table(Customers::Table)
                    .col(Customers::Status)
                    .col(Customers::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await
    }
}
