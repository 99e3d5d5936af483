//! Create `tienda` table.
//!
//! `ciudad` is a fixed 3-character code; the length rule itself lives in
//! the service layer so the column stays a plain short string.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tienda::Table)
                    .if_not_exists()
                    .col(string_len(Tienda::Id, 36).primary_key())
                    .col(string(Tienda::Nombre))
                    .col(string_len(Tienda::Ciudad, 16))
                    .col(string(Tienda::Direccion))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Tienda::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Tienda { Table, Id, Nombre, Ciudad, Direccion }
