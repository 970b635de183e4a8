use anyhow::Result;
use sea_orm::EntityTrait;

use super::setup_test_db;
use crate::contact;
use crate::errors::ModelError;

#[tokio::test]
async fn test_contact_crud() -> Result<()> {
    let db = setup_test_db().await?;

    // Create with a caller-supplied id
    let created = contact::create(&db, Some(7), "Joao", "5555-0001").await?;
    assert_eq!(created.id, 7);
    assert_eq!(created.name, "Joao");
    assert_eq!(created.phone, "5555-0001");

    // Read
    let found = contact::find_by_id(&db, 7).await?;
    assert_eq!(found.as_ref(), Some(&created));

    // Update
    let updated = contact::update(&db, created, "Joao Silva", "5555-0002").await?;
    assert_eq!(updated.id, 7);
    assert_eq!(updated.name, "Joao Silva");
    let reloaded = contact::Entity::find_by_id(7).one(&db).await?.unwrap();
    assert_eq!(reloaded.phone, "5555-0002");

    // Delete
    assert!(contact::delete(&db, 7).await?);
    assert!(contact::find_by_id(&db, 7).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_store_assigns_id_when_absent() -> Result<()> {
    let db = setup_test_db().await?;
    let a = contact::create(&db, None, "Ana", "1").await?;
    let b = contact::create(&db, None, "Bruno", "2").await?;
    assert!(a.id > 0);
    assert!(b.id > a.id);

    let all = contact::find_all(&db).await?;
    assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![a.id, b.id]);
    Ok(())
}

#[tokio::test]
async fn test_assigned_id_past_i32_range_round_trips() -> Result<()> {
    let db = setup_test_db().await?;
    let max = contact::create(&db, Some(i64::from(i32::MAX)), "Max", "1").await?;
    let next = contact::create(&db, None, "Ana", "2").await?;
    assert_eq!(next.id, max.id + 1);

    let all = contact::find_all(&db).await?;
    assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![max.id, next.id]);
    assert_eq!(contact::find_by_name(&db, "ana").await?.as_ref(), Some(&next));
    assert_eq!(contact::find_by_id(&db, next.id).await?.as_ref(), Some(&next));
    Ok(())
}

#[tokio::test]
async fn test_find_by_name_ignores_case() -> Result<()> {
    let db = setup_test_db().await?;
    let created = contact::create(&db, Some(1), "Joao", "5555").await?;

    for query in ["Joao", "joao", "JOAO", "jOaO"] {
        let found = contact::find_by_name(&db, query).await?;
        assert_eq!(found.as_ref(), Some(&created), "query {query}");
    }
    assert!(contact::find_by_name(&db, "Joa").await?.is_none());
    assert!(contact::find_by_name(&db, "Joao ").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_duplicate_id_is_unique_violation() -> Result<()> {
    let db = setup_test_db().await?;
    contact::create(&db, Some(1), "Ana", "1").await?;
    let err = contact::create(&db, Some(1), "Bruno", "2").await.unwrap_err();
    assert!(matches!(err, ModelError::UniqueViolation(_)), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn test_duplicate_name_is_unique_violation_regardless_of_case() -> Result<()> {
    let db = setup_test_db().await?;
    contact::create(&db, None, "Maria", "1").await?;
    let err = contact::create(&db, None, "MARIA", "2").await.unwrap_err();
    assert!(matches!(err, ModelError::UniqueViolation(_)), "got {err:?}");
    assert_eq!(contact::find_all(&db).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_update_onto_taken_name_fails() -> Result<()> {
    let db = setup_test_db().await?;
    contact::create(&db, Some(1), "Ana", "1").await?;
    let bruno = contact::create(&db, Some(2), "Bruno", "2").await?;
    let err = contact::update(&db, bruno, "ana", "2").await.unwrap_err();
    assert!(matches!(err, ModelError::UniqueViolation(_)), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn test_update_of_vanished_row_is_not_found() -> Result<()> {
    let db = setup_test_db().await?;
    let ana = contact::create(&db, Some(1), "Ana", "1").await?;
    contact::delete(&db, 1).await?;
    let err = contact::update(&db, ana, "Ana", "9").await.unwrap_err();
    assert!(matches!(err, ModelError::NotFound(_)), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn test_delete_missing_is_not_an_error() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(!contact::delete(&db, 404).await?);
    Ok(())
}
