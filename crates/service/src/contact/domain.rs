use serde::{Deserialize, Serialize};

/// Request body for create and update.
///
/// `id` is optional on create (the store assigns one) and must match the
/// path id on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInput {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
    #[serde(rename = "telefone", alias = "phone")]
    pub phone: String,
}

impl ContactInput {
    pub fn new(id: Option<i64>, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self { id, name: name.into(), phone: phone.into() }
    }
}
