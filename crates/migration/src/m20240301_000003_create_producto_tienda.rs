//! Create `producto_tienda` pair table.
//! One row per association; no extra columns. Rows go away with either side.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductoTienda::Table)
                    .if_not_exists()
                    .col(string_len(ProductoTienda::ProductoId, 36))
                    .col(string_len(ProductoTienda::TiendaId, 36))
                    .primary_key(
                        Index::create()
                            .col(ProductoTienda::ProductoId)
                            .col(ProductoTienda::TiendaId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_producto_tienda_producto")
                            .from(ProductoTienda::Table, ProductoTienda::ProductoId)
                            .to(Producto::Table, Producto::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_producto_tienda_tienda")
                            .from(ProductoTienda::Table, ProductoTienda::TiendaId)
                            .to(Tienda::Table, Tienda::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Reverse lookups (tienda -> productos) scan by tienda_id
        manager
            .create_index(
                Index::create()
                    .name("idx_producto_tienda_tienda")
                    .table(ProductoTienda::Table)
                    .col(ProductoTienda::TiendaId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProductoTienda::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ProductoTienda { Table, ProductoId, TiendaId }

#[derive(DeriveIden)]
enum Producto { Table, Id }

#[derive(DeriveIden)]
enum Tienda { Table, Id }
