//! Create `agenda` table.
//!
//! One row per contact. The name column uses the NOCASE collation so the
//! unique constraint and equality lookups both ignore ASCII case.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Agenda::Table)
                    .if_not_exists()
                    .col(pk_auto(Agenda::Id))
                    .col(string_len(Agenda::Name, 128).unique_key().extra("COLLATE NOCASE"))
                    .col(string_len(Agenda::Phone, 32))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Agenda::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Agenda { Table, Id, Name, Phone }
