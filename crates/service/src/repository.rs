use async_trait::async_trait;

use crate::domain::{Producto, Tienda};
use crate::errors::ServiceError;

/// Record store for productos.
///
/// Reads always load the associated tiendas. `save` upserts the producto row
/// and rewrites its association pairs to exactly `producto.tiendas`
/// (deduplicated by id) as one atomic write, then returns the stored state.
#[async_trait]
pub trait ProductoRepository: Send + Sync {
    async fn find(&self) -> Result<Vec<Producto>, ServiceError>;
    async fn find_one(&self, id: &str) -> Result<Option<Producto>, ServiceError>;
    async fn save(&self, producto: Producto) -> Result<Producto, ServiceError>;
    /// Deletes the row and its pairs; `false` if nothing matched.
    async fn remove(&self, id: &str) -> Result<bool, ServiceError>;
    async fn clear(&self) -> Result<(), ServiceError>;
}

/// Record store for tiendas.
///
/// Reads load the inverse producto set. `save` only writes the tienda row;
/// associations are owned by the producto side.
#[async_trait]
pub trait TiendaRepository: Send + Sync {
    async fn find(&self) -> Result<Vec<Tienda>, ServiceError>;
    async fn find_one(&self, id: &str) -> Result<Option<Tienda>, ServiceError>;
    async fn save(&self, tienda: Tienda) -> Result<Tienda, ServiceError>;
    async fn remove(&self, id: &str) -> Result<bool, ServiceError>;
    async fn clear(&self) -> Result<(), ServiceError>;
}
