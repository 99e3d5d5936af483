use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
    TransactionTrait,
};

use models::{producto, producto_tienda, tienda};

use crate::domain::{Producto, Tienda};
use crate::errors::ServiceError;
use crate::repository::{ProductoRepository, TiendaRepository};

/// SeaORM-backed producto store.
#[derive(Clone)]
pub struct SeaOrmProductoRepository {
    pub db: DatabaseConnection,
}

/// SeaORM-backed tienda store.
#[derive(Clone)]
pub struct SeaOrmTiendaRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmProductoRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

impl SeaOrmTiendaRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ProductoRepository for SeaOrmProductoRepository {
    async fn find(&self) -> Result<Vec<Producto>, ServiceError> {
        let rows = producto::Entity::find()
            .find_with_related(tienda::Entity)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|(p, ts)| Producto::from_parts(p, ts)).collect())
    }

    async fn find_one(&self, id: &str) -> Result<Option<Producto>, ServiceError> {
        let Some(row) = producto::Entity::find_by_id(id.to_string()).one(&self.db).await? else {
            return Ok(None);
        };
        let tiendas = row.find_related(tienda::Entity).all(&self.db).await?;
        Ok(Some(Producto::from_parts(row, tiendas)))
    }

    async fn save(&self, producto: Producto) -> Result<Producto, ServiceError> {
        let id = producto.id.clone();
        let txn = self.db.begin().await?;

        let exists = producto::Entity::find_by_id(id.clone()).one(&txn).await?.is_some();
        let row = producto.row();
        let am = producto::ActiveModel {
            id: Set(row.id),
            nombre: Set(row.nombre),
            precio: Set(row.precio),
            tipo: Set(row.tipo),
        };
        if exists {
            am.update(&txn).await?;
        } else {
            am.insert(&txn).await?;
        }

        producto_tienda::Entity::delete_many()
            .filter(producto_tienda::Column::ProductoId.eq(id.clone()))
            .exec(&txn)
            .await?;
        let pares: Vec<producto_tienda::ActiveModel> = producto
            .tienda_ids()
            .into_iter()
            .map(|tienda_id| producto_tienda::ActiveModel {
                producto_id: Set(id.clone()),
                tienda_id: Set(tienda_id),
            })
            .collect();
        if !pares.is_empty() {
            producto_tienda::Entity::insert_many(pares).exec_without_returning(&txn).await?;
        }
        txn.commit().await?;

        self.find_one(&id)
            .await?
            .ok_or_else(|| ServiceError::Db(format!("producto {id} missing after save")))
    }

    async fn remove(&self, id: &str) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        producto_tienda::Entity::delete_many()
            .filter(producto_tienda::Column::ProductoId.eq(id.to_string()))
            .exec(&txn)
            .await?;
        let res = producto::Entity::delete_by_id(id.to_string()).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }

    async fn clear(&self) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        producto_tienda::Entity::delete_many().exec(&txn).await?;
        producto::Entity::delete_many().exec(&txn).await?;
        txn.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl TiendaRepository for SeaOrmTiendaRepository {
    async fn find(&self) -> Result<Vec<Tienda>, ServiceError> {
        let rows = tienda::Entity::find()
            .find_with_related(producto::Entity)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(|(t, ps)| Tienda::from_parts(t, ps)).collect())
    }

    async fn find_one(&self, id: &str) -> Result<Option<Tienda>, ServiceError> {
        let Some(row) = tienda::Entity::find_by_id(id.to_string()).one(&self.db).await? else {
            return Ok(None);
        };
        let productos = row.find_related(producto::Entity).all(&self.db).await?;
        Ok(Some(Tienda::from_parts(row, productos)))
    }

    async fn save(&self, tienda: Tienda) -> Result<Tienda, ServiceError> {
        let row = tienda.into_row();
        let id = row.id.clone();
        let exists = tienda::Entity::find_by_id(id.clone()).one(&self.db).await?.is_some();
        let am = tienda::ActiveModel {
            id: Set(row.id),
            nombre: Set(row.nombre),
            ciudad: Set(row.ciudad),
            direccion: Set(row.direccion),
        };
        if exists {
            am.update(&self.db).await?;
        } else {
            am.insert(&self.db).await?;
        }
        self.find_one(&id)
            .await?
            .ok_or_else(|| ServiceError::Db(format!("tienda {id} missing after save")))
    }

    async fn remove(&self, id: &str) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        producto_tienda::Entity::delete_many()
            .filter(producto_tienda::Column::TiendaId.eq(id.to_string()))
            .exec(&txn)
            .await?;
        let res = tienda::Entity::delete_by_id(id.to_string()).exec(&txn).await?;
        txn.commit().await?;
        Ok(res.rows_affected > 0)
    }

    async fn clear(&self) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;
        producto_tienda::Entity::delete_many().exec(&txn).await?;
        tienda::Entity::delete_many().exec(&txn).await?;
        txn.commit().await?;
        Ok(())
    }
}
