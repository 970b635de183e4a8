use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("contact id {} already exists", .0.id)]
    DuplicateId(models::contact::Model),
    #[error("contact name '{0}' already exists")]
    DuplicateName(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::Model(models::errors::ModelError::UniqueViolation(_)))
    }
}
