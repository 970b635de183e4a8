use std::sync::Arc;

use models::contact::Model as Contact;
use models::errors::ModelError;
use tracing::{debug, info, instrument};

use super::domain::ContactInput;
use super::repository::ContactRepository;
use crate::errors::ServiceError;

/// Contact business service independent of web framework.
///
/// Enforces the existence and uniqueness rules: ids and case-insensitive
/// names are unique, updates and deletes need an existing id.
pub struct ContactService<R: ContactRepository> {
    repo: Arc<R>,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// List every contact.
    ///
    /// # Examples
    /// ```
    /// use service::contact::{ContactService, domain::ContactInput, repository::mock::MockContactRepository};
    /// use std::sync::Arc;
    /// let svc = ContactService::new(Arc::new(MockContactRepository::default()));
    /// tokio_test::block_on(svc.create(ContactInput::new(None, "Joao", "5555"))).unwrap();
    /// let all = tokio_test::block_on(svc.list()).unwrap();
    /// assert_eq!(all.len(), 1);
    /// ```
    pub async fn list(&self) -> Result<Vec<Contact>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Contact>, ServiceError> {
        self.repo.get(id).await
    }

    /// Case-insensitive lookup. A missing or blank name is a validation error.
    pub async fn find_by_name(&self, name: Option<&str>) -> Result<Option<Contact>, ServiceError> {
        let name = match name {
            Some(n) if !n.trim().is_empty() => n,
            _ => return Err(ServiceError::Validation("query parameter 'nome' is required".into())),
        };
        self.repo.find_by_name(name).await
    }

    /// Create a contact. The id and name checks give precise conflicts; the
    /// store's constraints catch whatever races past them.
    #[instrument(skip(self, input), fields(id = ?input.id, name = %input.name))]
    pub async fn create(&self, input: ContactInput) -> Result<Contact, ServiceError> {
        if let Some(id) = input.id {
            if let Some(existing) = self.repo.get(id).await? {
                debug!(id, "contact id taken");
                return Err(ServiceError::DuplicateId(existing));
            }
        }
        if self.repo.find_by_name(&input.name).await?.is_some() {
            debug!("contact name taken");
            return Err(ServiceError::DuplicateName(input.name));
        }

        let created = self.repo.create(&input).await;
        match created {
            Ok(created) => {
                info!(id = created.id, "contact_created");
                Ok(created)
            }
            Err(e) if e.is_unique_violation() => Err(self.classify_conflict(input).await?),
            Err(e) => Err(e),
        }
    }

    /// Replace name and phone of the contact at `id`.
    /// The body id must be present and equal to `id`.
    #[instrument(skip(self, input), fields(body_id = ?input.id))]
    pub async fn update(&self, id: i64, input: ContactInput) -> Result<Contact, ServiceError> {
        if input.id != Some(id) {
            return Err(ServiceError::Validation(format!(
                "path id {id} does not match body id {}",
                input.id.map_or_else(|| "(missing)".to_string(), |v| v.to_string())
            )));
        }
        let existing = self
            .repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("contact"))?;

        let updated = self.repo.update(existing, &input).await;
        match updated {
            Ok(updated) => {
                info!(id, "contact_updated");
                Ok(updated)
            }
            Err(e) if e.is_unique_violation() => Err(ServiceError::DuplicateName(input.name)),
            Err(ServiceError::Model(ModelError::NotFound(_))) => Err(ServiceError::not_found("contact")),
            Err(e) => Err(e),
        }
    }

    /// Delete by id; `NotFound` when nothing was removed.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("contact"));
        }
        info!(id, "contact_deleted");
        Ok(())
    }

    async fn classify_conflict(&self, input: ContactInput) -> Result<ServiceError, ServiceError> {
        if let Some(id) = input.id {
            if let Some(existing) = self.repo.get(id).await? {
                return Ok(ServiceError::DuplicateId(existing));
            }
        }
        Ok(ServiceError::DuplicateName(input.name))
    }
}
