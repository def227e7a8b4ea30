pub use sea_orm_migration::prelude::*;

mod m20251016_000001_create_customers;
mod m20251016_000002_create_history;

/// Customers and history are kept in separate databases, so each store
/// gets its own migrator and its own bookkeeping table. Pointing both
/// stores at one database therefore still works.
pub struct CustomerMigrator;

#[async_trait::async_trait]
impl MigratorTrait for CustomerMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20251016_000001_create_customers::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_customers").into_iden()
    }
}

pub struct HistoryMigrator;

#[async_trait::async_trait]
impl MigratorTrait for HistoryMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20251016_000002_create_history::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_history").into_iden()
    }
}
