use std::sync::Arc;

use sea_orm::DatabaseConnection;

use service::repo::memory::InMemoryCatalog;
use service::repo::seaorm::{SeaOrmProductoRepository, SeaOrmTiendaRepository};
use service::repository::{ProductoRepository, TiendaRepository};
use service::{ProductoService, ProductoTiendaService, TiendaService};

pub type DynProductoService = ProductoService<dyn ProductoRepository>;
pub type DynTiendaService = TiendaService<dyn TiendaRepository>;
pub type DynProductoTiendaService = ProductoTiendaService<dyn ProductoRepository, dyn TiendaRepository>;

/// Services shared by all handlers. The three services are built over one
/// pair of repositories so they all see the same store.
#[derive(Clone)]
pub struct ServerState {
    pub productos: Arc<DynProductoService>,
    pub tiendas: Arc<DynTiendaService>,
    pub producto_tiendas: Arc<DynProductoTiendaService>,
}

impl ServerState {
    pub fn from_repos(productos: Arc<dyn ProductoRepository>, tiendas: Arc<dyn TiendaRepository>) -> Self {
        Self {
            productos: Arc::new(ProductoService::new(Arc::clone(&productos))),
            tiendas: Arc::new(TiendaService::new(Arc::clone(&tiendas))),
            producto_tiendas: Arc::new(ProductoTiendaService::new(productos, tiendas)),
        }
    }

    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self::from_repos(
            Arc::new(SeaOrmProductoRepository::new(db.clone())),
            Arc::new(SeaOrmTiendaRepository::new(db)),
        )
    }

    /// Volatile state, used by router tests.
    pub fn in_memory() -> Self {
        let catalog = InMemoryCatalog::new();
        Self::from_repos(Arc::new(catalog.productos()), Arc::new(catalog.tiendas()))
    }
}
