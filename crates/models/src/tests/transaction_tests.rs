use anyhow::Result;
use sea_orm::{ActiveModelTrait, Set, TransactionTrait};

use super::setup_test_db;
use crate::contact;

/// Test basic transaction commit
#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let am = contact::ActiveModel { name: Set("Carla".into()), phone: Set("3".into()), ..Default::default() };
    let created = am.insert(&txn).await?;
    txn.commit().await?;

    let found = contact::find_by_id(&db, created.id).await?;
    assert_eq!(found, Some(created));
    Ok(())
}

/// Test transaction rollback
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let am = contact::ActiveModel { id: Set(42), name: Set("Davi".into()), phone: Set("4".into()) };
    am.insert(&txn).await?;
    txn.rollback().await?;

    assert!(contact::find_by_id(&db, 42).await?.is_none());
    assert!(contact::find_by_name(&db, "davi").await?.is_none());
    Ok(())
}
