use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use models::{producto, tienda};

use crate::domain::{Producto, Tienda};
use crate::errors::ServiceError;
use crate::repository::{ProductoRepository, TiendaRepository};

/// Entity tables keyed by id plus the association as `(producto_id, tienda_id)` pairs.
#[derive(Default)]
struct Tables {
    productos: BTreeMap<String, producto::Model>,
    tiendas: BTreeMap<String, tienda::Model>,
    pares: Vec<(String, String)>,
}

impl Tables {
    fn producto(&self, row: &producto::Model) -> Producto {
        let tiendas = self
            .pares
            .iter()
            .filter(|(p, _)| *p == row.id)
            .filter_map(|(_, t)| self.tiendas.get(t).cloned())
            .collect();
        Producto::from_parts(row.clone(), tiendas)
    }

    fn tienda(&self, row: &tienda::Model) -> Tienda {
        let productos = self
            .pares
            .iter()
            .filter(|(_, t)| *t == row.id)
            .filter_map(|(p, _)| self.productos.get(p).cloned())
            .collect();
        Tienda::from_parts(row.clone(), productos)
    }
}

/// Shared in-process catalog. Hand out one repository per entity; they
/// all see the same tables.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use service::repo::memory::InMemoryCatalog;
/// use service::{domain::ProductoDto, ProductoService};
///
/// let catalog = InMemoryCatalog::new();
/// let svc = ProductoService::new(Arc::new(catalog.productos()));
/// let dto = ProductoDto { nombre: "Leche".into(), precio: 4.5, tipo: "Perecedero".into() };
/// let p = tokio_test::block_on(svc.create(dto)).unwrap();
/// assert!(p.tiendas.is_empty());
/// ```
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<Tables>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self { Self::default() }

    pub fn productos(&self) -> InMemoryProductoRepository {
        InMemoryProductoRepository { inner: Arc::clone(&self.inner) }
    }

    pub fn tiendas(&self) -> InMemoryTiendaRepository {
        InMemoryTiendaRepository { inner: Arc::clone(&self.inner) }
    }
}

#[derive(Clone)]
pub struct InMemoryProductoRepository {
    inner: Arc<RwLock<Tables>>,
}

#[derive(Clone)]
pub struct InMemoryTiendaRepository {
    inner: Arc<RwLock<Tables>>,
}

#[async_trait]
impl ProductoRepository for InMemoryProductoRepository {
    async fn find(&self) -> Result<Vec<Producto>, ServiceError> {
        let tables = self.inner.read().await;
        Ok(tables.productos.values().map(|row| tables.producto(row)).collect())
    }

    async fn find_one(&self, id: &str) -> Result<Option<Producto>, ServiceError> {
        let tables = self.inner.read().await;
        Ok(tables.productos.get(id).map(|row| tables.producto(row)))
    }

    async fn save(&self, producto: Producto) -> Result<Producto, ServiceError> {
        let mut tables = self.inner.write().await;
        let ids = producto.tienda_ids();
        // Same outcome as a foreign key violation: nothing is written.
        if let Some(missing) = ids.iter().find(|id| !tables.tiendas.contains_key(*id)) {
            return Err(ServiceError::Db(format!("tienda {missing} does not exist")));
        }
        let row = producto.row();
        tables.pares.retain(|(p, _)| *p != row.id);
        tables.pares.extend(ids.into_iter().map(|t| (row.id.clone(), t)));
        tables.productos.insert(row.id.clone(), row.clone());
        Ok(tables.producto(&row))
    }

    async fn remove(&self, id: &str) -> Result<bool, ServiceError> {
        let mut tables = self.inner.write().await;
        let existed = tables.productos.remove(id).is_some();
        tables.pares.retain(|(p, _)| p != id);
        Ok(existed)
    }

    async fn clear(&self) -> Result<(), ServiceError> {
        let mut tables = self.inner.write().await;
        tables.productos.clear();
        tables.pares.clear();
        Ok(())
    }
}

#[async_trait]
impl TiendaRepository for InMemoryTiendaRepository {
    async fn find(&self) -> Result<Vec<Tienda>, ServiceError> {
        let tables = self.inner.read().await;
        Ok(tables.tiendas.values().map(|row| tables.tienda(row)).collect())
    }

    async fn find_one(&self, id: &str) -> Result<Option<Tienda>, ServiceError> {
        let tables = self.inner.read().await;
        Ok(tables.tiendas.get(id).map(|row| tables.tienda(row)))
    }

    async fn save(&self, tienda: Tienda) -> Result<Tienda, ServiceError> {
        let mut tables = self.inner.write().await;
        let row = tienda.into_row();
        tables.tiendas.insert(row.id.clone(), row.clone());
        Ok(tables.tienda(&row))
    }

    async fn remove(&self, id: &str) -> Result<bool, ServiceError> {
        let mut tables = self.inner.write().await;
        let existed = tables.tiendas.remove(id).is_some();
        tables.pares.retain(|(_, t)| t != id);
        Ok(existed)
    }

    async fn clear(&self) -> Result<(), ServiceError> {
        let mut tables = self.inner.write().await;
        tables.tiendas.clear();
        tables.pares.clear();
        Ok(())
    }
}
