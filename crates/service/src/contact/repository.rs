use async_trait::async_trait;
use models::contact::Model as Contact;

use super::domain::ContactInput;
use crate::errors::ServiceError;

/// Storage primitives for contacts.
///
/// Implementations must reject a duplicate id or a case-insensitively
/// duplicate name on `create`/`update` with
/// `ServiceError::Model(ModelError::UniqueViolation(_))`.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Contact>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<Contact>, ServiceError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, ServiceError>;
    async fn create(&self, input: &ContactInput) -> Result<Contact, ServiceError>;
    /// Copy name and phone from `input` onto `existing`; the id is not touched.
    async fn update(&self, existing: Contact, input: &ContactInput) -> Result<Contact, ServiceError>;
    /// Whether a row was removed. Deleting a missing id is not an error.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use models::errors::ModelError;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    #[derive(Default)]
    pub struct MockContactRepository {
        rows: Mutex<BTreeMap<i64, Contact>>, // key: id
    }

    impl MockContactRepository {
        fn rows(&self) -> MutexGuard<'_, BTreeMap<i64, Contact>> {
            self.rows.lock().unwrap_or_else(PoisonError::into_inner)
        }

        fn name_taken(rows: &BTreeMap<i64, Contact>, name: &str, except: Option<i64>) -> bool {
            rows.values()
                .any(|c| Some(c.id) != except && c.name.eq_ignore_ascii_case(name))
        }

        fn violation(what: &str) -> ServiceError {
            ServiceError::Model(ModelError::UniqueViolation(format!("agenda.{what}")))
        }
    }

    #[async_trait]
    impl ContactRepository for MockContactRepository {
        async fn list(&self) -> Result<Vec<Contact>, ServiceError> {
            Ok(self.rows().values().cloned().collect())
        }

        async fn get(&self, id: i64) -> Result<Option<Contact>, ServiceError> {
            Ok(self.rows().get(&id).cloned())
        }

        async fn find_by_name(&self, name: &str) -> Result<Option<Contact>, ServiceError> {
            Ok(self.rows().values().find(|c| c.name.eq_ignore_ascii_case(name)).cloned())
        }

        async fn create(&self, input: &ContactInput) -> Result<Contact, ServiceError> {
            let mut rows = self.rows();
            let id = match input.id {
                Some(id) if rows.contains_key(&id) => return Err(Self::violation("id")),
                Some(id) => id,
                None => rows.keys().next_back().map_or(1, |max| max + 1),
            };
            if Self::name_taken(&rows, &input.name, None) {
                return Err(Self::violation("name"));
            }
            let contact = Contact { id, name: input.name.clone(), phone: input.phone.clone() };
            rows.insert(id, contact.clone());
            Ok(contact)
        }

        async fn update(&self, existing: Contact, input: &ContactInput) -> Result<Contact, ServiceError> {
            let mut rows = self.rows();
            if !rows.contains_key(&existing.id) {
                return Err(ServiceError::Model(ModelError::NotFound("record not updated".into())));
            }
            if Self::name_taken(&rows, &input.name, Some(existing.id)) {
                return Err(Self::violation("name"));
            }
            let updated = Contact { name: input.name.clone(), phone: input.phone.clone(), ..existing };
            rows.insert(updated.id, updated.clone());
            Ok(updated)
        }

        async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.rows().remove(&id).is_some())
        }
    }
}
