use sea_orm::{entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A contact-book entry. Serialized with the Portuguese keys the API has always used.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "agenda")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
    #[serde(rename = "telefone", alias = "phone")]
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// All contacts, ordered by id.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Exact, case-insensitive match. The column is declared `COLLATE NOCASE`,
/// so a plain equality filter already folds ASCII case.
pub async fn find_by_name(db: &DatabaseConnection, name: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find()
        .filter(Column::Name.eq(name))
        .order_by_asc(Column::Id)
        .one(db)
        .await?)
}

/// Insert a contact. `id: None` lets the store assign the next id.
/// A taken id or name comes back as [`ModelError::UniqueViolation`].
pub async fn create(
    db: &DatabaseConnection,
    id: Option<i64>,
    name: &str,
    phone: &str,
) -> Result<Model, ModelError> {
    let mut am = ActiveModel {
        name: Set(name.to_string()),
        phone: Set(phone.to_string()),
        ..Default::default()
    };
    if let Some(id) = id {
        am.id = Set(id);
    }
    Ok(am.insert(db).await?)
}

/// Copy name and phone onto `existing` and persist it.
pub async fn update(
    db: &DatabaseConnection,
    existing: Model,
    name: &str,
    phone: &str,
) -> Result<Model, ModelError> {
    let mut am: ActiveModel = existing.into();
    am.name = Set(name.to_string());
    am.phone = Set(phone.to_string());
    Ok(am.update(db).await?)
}

/// Remove by id. Returns whether a row was removed; absence is not an error.
pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
