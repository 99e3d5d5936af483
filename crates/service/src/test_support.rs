#![cfg(test)]
use std::sync::Arc;

use migration::MigratorTrait;

use crate::domain::{new_id, Producto, ProductoDto, Tienda, TiendaDto};
use crate::repo::memory::InMemoryCatalog;
use crate::repo::seaorm::{SeaOrmProductoRepository, SeaOrmTiendaRepository};
use crate::repository::{ProductoRepository, TiendaRepository};

/// One pair of repositories sharing a store. Every service test runs once per backend.
pub struct Backend {
    pub name: &'static str,
    pub productos: Arc<dyn ProductoRepository>,
    pub tiendas: Arc<dyn TiendaRepository>,
}

impl Backend {
    pub async fn seed_tienda(&self, nombre: &str, ciudad: &str) -> Result<Tienda, anyhow::Error> {
        self.seed_tienda_full(nombre, ciudad, &format!("Calle {nombre}")).await
    }

    pub async fn seed_tienda_full(&self, nombre: &str, ciudad: &str, direccion: &str) -> Result<Tienda, anyhow::Error> {
        let tienda = Tienda {
            id: new_id(),
            nombre: nombre.into(),
            ciudad: ciudad.into(),
            direccion: direccion.into(),
            productos: Vec::new(),
        };
        Ok(self.tiendas.save(tienda).await?)
    }

    /// Stores a perishable producto already associated with `tienda_ids`.
    pub async fn seed_producto(&self, nombre: &str, tienda_ids: &[&str]) -> Result<Producto, anyhow::Error> {
        let mut tiendas = Vec::with_capacity(tienda_ids.len());
        for id in tienda_ids {
            let t = self
                .tiendas
                .find_one(id)
                .await?
                .ok_or_else(|| anyhow::anyhow!("seed tienda {id} missing"))?;
            tiendas.push(t.into_row());
        }
        let producto = Producto {
            id: new_id(),
            nombre: nombre.into(),
            precio: 10.0,
            tipo: "Perecedero".into(),
            tiendas,
        };
        Ok(self.productos.save(producto).await?)
    }
}

/// A fresh in-memory catalog and a freshly migrated SQLite memory database.
pub async fn backends() -> Result<Vec<Backend>, anyhow::Error> {
    let catalog = InMemoryCatalog::new();
    let memory = Backend {
        name: "memory",
        productos: Arc::new(catalog.productos()),
        tiendas: Arc::new(catalog.tiendas()),
    };

    let db = models::db::connect_memory().await?;
    migration::Migrator::up(&db, None).await?;
    let sqlite = Backend {
        name: "sqlite",
        productos: Arc::new(SeaOrmProductoRepository::new(db.clone())),
        tiendas: Arc::new(SeaOrmTiendaRepository::new(db)),
    };

    Ok(vec![memory, sqlite])
}

pub fn producto_dto(nombre: &str, tipo: &str) -> ProductoDto {
    ProductoDto { nombre: nombre.into(), precio: 10.0, tipo: tipo.into() }
}

pub fn tienda_dto(nombre: &str, ciudad: &str) -> TiendaDto {
    TiendaDto { nombre: nombre.into(), ciudad: ciudad.into(), direccion: format!("Calle {nombre}") }
}
