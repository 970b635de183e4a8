use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self {
        if let sea_orm::DbErr::RecordNotUpdated = e {
            return ModelError::NotFound("record not updated".into());
        }
        match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => ModelError::UniqueViolation(msg),
            _ => {
                let msg = e.to_string();
                if msg.contains("UNIQUE constraint failed") {
                    ModelError::UniqueViolation(msg)
                } else {
                    ModelError::Db(msg)
                }
            }
        }
    }
}
