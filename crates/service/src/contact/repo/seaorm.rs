use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::contact::{self, Model as Contact};

use crate::contact::domain::ContactInput;
use crate::contact::repository::ContactRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmContactRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmContactRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ContactRepository for SeaOrmContactRepository {
    async fn list(&self) -> Result<Vec<Contact>, ServiceError> {
        Ok(contact::find_all(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<Contact>, ServiceError> {
        Ok(contact::find_by_id(&self.db, id).await?)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, ServiceError> {
        Ok(contact::find_by_name(&self.db, name).await?)
    }

    async fn create(&self, input: &ContactInput) -> Result<Contact, ServiceError> {
        Ok(contact::create(&self.db, input.id, &input.name, &input.phone).await?)
    }

    async fn update(&self, existing: Contact, input: &ContactInput) -> Result<Contact, ServiceError> {
        Ok(contact::update(&self.db, existing, &input.name, &input.phone).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(contact::delete(&self.db, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seaorm_repository_crud() -> Result<(), anyhow::Error> {
        let repo = SeaOrmContactRepository::new(get_db().await?);

        let created = repo.create(&ContactInput::new(Some(3), "Joao", "5555")).await?;
        assert_eq!(repo.get(3).await?, Some(created.clone()));
        assert_eq!(repo.find_by_name("JOAO").await?, Some(created.clone()));

        let updated = repo.update(created, &ContactInput::new(Some(3), "Joao Silva", "6666")).await?;
        assert_eq!(updated.name, "Joao Silva");
        assert_eq!(repo.list().await?, vec![updated]);

        assert!(repo.delete(3).await?);
        assert!(!repo.delete(3).await?);
        assert!(repo.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_repository_reports_unique_violations() -> Result<(), anyhow::Error> {
        let repo = SeaOrmContactRepository::new(get_db().await?);
        repo.create(&ContactInput::new(Some(1), "Ana", "1")).await?;

        let dup_id = repo.create(&ContactInput::new(Some(1), "Bia", "2")).await.unwrap_err();
        assert!(dup_id.is_unique_violation(), "got {dup_id:?}");

        let dup_name = repo.create(&ContactInput::new(None, "ana", "2")).await.unwrap_err();
        assert!(dup_name.is_unique_violation(), "got {dup_name:?}");
        Ok(())
    }
}
