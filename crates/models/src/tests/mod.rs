use sea_orm::DatabaseConnection;
use migration::MigratorTrait;

use crate::db::{connect_with_config, DatabaseConfig};


/// CRUD operations tests for contacts
pub mod crud_tests;

/// Transaction handling tests
pub mod transaction_tests;

/// Fresh, migrated in-memory database for a single test.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
