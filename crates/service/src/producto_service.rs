use std::sync::Arc;

use tracing::{info, instrument};

use models::producto;

use crate::domain::{new_id, Producto, ProductoDto};
use crate::errors::ServiceError;
use crate::repository::ProductoRepository;

/// CRUD over productos with the `tipo` label rule.
pub struct ProductoService<R: ProductoRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ProductoRepository + ?Sized> ProductoService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// All productos with their tiendas.
    pub async fn find_all(&self) -> Result<Vec<Producto>, ServiceError> {
        self.repo.find().await
    }

    pub async fn find_one(&self, id: &str) -> Result<Producto, ServiceError> {
        self.repo.find_one(id).await?.ok_or_else(ServiceError::producto_not_found)
    }

    /// Create a producto; `tipo` must be `Perecedero` or `No perecedero`.
    #[instrument(skip(self, dto), fields(nombre = %dto.nombre, tipo = %dto.tipo))]
    pub async fn create(&self, dto: ProductoDto) -> Result<Producto, ServiceError> {
        dto.validate()?;
        producto::validate_tipo(&dto.tipo)?;
        let producto = Producto {
            id: new_id(),
            nombre: dto.nombre,
            precio: dto.precio,
            tipo: dto.tipo,
            tiendas: Vec::new(),
        };
        let saved = self.repo.save(producto).await?;
        info!(id = %saved.id, "producto_created");
        Ok(saved)
    }

    /// Merge `dto` onto the stored producto. Associations are kept.
    #[instrument(skip(self, dto))]
    pub async fn update(&self, id: &str, dto: ProductoDto) -> Result<Producto, ServiceError> {
        dto.validate()?;
        let mut persisted = self.find_one(id).await?;
        producto::validate_tipo(&dto.tipo)?;
        persisted.nombre = dto.nombre;
        persisted.precio = dto.precio;
        persisted.tipo = dto.tipo;
        let saved = self.repo.save(persisted).await?;
        info!(id = %saved.id, "producto_updated");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: &str) -> Result<(), ServiceError> {
        let producto = self.find_one(id).await?;
        self.repo.remove(&producto.id).await?;
        info!(id = %producto.id, "producto_removed");
        Ok(())
    }
}
