//! Producto ↔ Tienda associations.
//!
//! Every operation resolves the referenced records before it writes. In the
//! single-pair operations the tienda is looked up first, so when both ids are
//! unknown the caller sees the tienda error. Replacing the whole set checks
//! the producto first, then each tienda in the order given.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use models::tienda;

use crate::domain::{Producto, Tienda, TiendaRef};
use crate::errors::ServiceError;
use crate::repository::{ProductoRepository, TiendaRepository};

pub struct ProductoTiendaService<P, T>
where
    P: ProductoRepository + ?Sized,
    T: TiendaRepository + ?Sized,
{
    productos: Arc<P>,
    tiendas: Arc<T>,
}

impl<P, T> ProductoTiendaService<P, T>
where
    P: ProductoRepository + ?Sized,
    T: TiendaRepository + ?Sized,
{
    pub fn new(productos: Arc<P>, tiendas: Arc<T>) -> Self { Self { productos, tiendas } }

    async fn load_tienda(&self, tienda_id: &str) -> Result<Tienda, ServiceError> {
        self.tiendas.find_one(tienda_id).await?.ok_or_else(ServiceError::tienda_not_found)
    }

    async fn load_producto(&self, producto_id: &str) -> Result<Producto, ServiceError> {
        self.productos.find_one(producto_id).await?.ok_or_else(ServiceError::producto_not_found)
    }

    /// Associate a tienda with a producto and return the updated producto.
    /// Adding a pair that already exists leaves the set as it is.
    #[instrument(skip(self))]
    pub async fn add_tienda_to_producto(&self, producto_id: &str, tienda_id: &str) -> Result<Producto, ServiceError> {
        let tienda = self.load_tienda(tienda_id).await?;
        let mut producto = self.load_producto(producto_id).await?;

        if producto.tienda(&tienda.id).is_some() {
            debug!(producto_id, tienda_id, "tienda already associated");
            return Ok(producto);
        }
        producto.tiendas.push(tienda.into_row());
        let saved = self.productos.save(producto).await?;
        info!(producto_id = %saved.id, tienda_id, tiendas = saved.tiendas.len(), "tienda_added_to_producto");
        Ok(saved)
    }

    /// The associated tienda, or `PreconditionFailed` if the pair does not exist.
    pub async fn find_tienda_by_producto_id_tienda_id(&self, producto_id: &str, tienda_id: &str) -> Result<tienda::Model, ServiceError> {
        let tienda = self.load_tienda(tienda_id).await?;
        let producto = self.load_producto(producto_id).await?;
        producto.tienda(&tienda.id).cloned().ok_or_else(ServiceError::tienda_not_associated)
    }

    pub async fn find_tiendas_by_producto_id(&self, producto_id: &str) -> Result<Vec<tienda::Model>, ServiceError> {
        Ok(self.load_producto(producto_id).await?.tiendas)
    }

    /// Replace the producto's whole tienda set. Any unknown tienda aborts the
    /// call before anything is written.
    #[instrument(skip(self, tiendas), fields(count = tiendas.len()))]
    pub async fn associate_tiendas_producto(&self, producto_id: &str, tiendas: Vec<TiendaRef>) -> Result<Producto, ServiceError> {
        let mut producto = self.load_producto(producto_id).await?;

        let mut resolved = Vec::with_capacity(tiendas.len());
        for r in &tiendas {
            match self.tiendas.find_one(&r.id).await? {
                Some(t) => resolved.push(t.into_row()),
                None => {
                    warn!(producto_id, tienda_id = %r.id, "unknown tienda in association list");
                    return Err(ServiceError::tienda_not_found());
                }
            }
        }

        producto.tiendas = resolved;
        let saved = self.productos.save(producto).await?;
        info!(producto_id = %saved.id, tiendas = saved.tiendas.len(), "tiendas_associated");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn delete_tienda_producto(&self, producto_id: &str, tienda_id: &str) -> Result<(), ServiceError> {
        let tienda = self.load_tienda(tienda_id).await?;
        let mut producto = self.load_producto(producto_id).await?;

        if producto.tienda(&tienda.id).is_none() {
            return Err(ServiceError::tienda_not_associated());
        }
        producto.tiendas.retain(|t| t.id != tienda.id);
        self.productos.save(producto).await?;
        info!(producto_id, tienda_id, "tienda_removed_from_producto");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{PRODUCTO_NO_EXISTE, TIENDA_NO_ASOCIADA, TIENDA_NO_EXISTE};
    use crate::test_support::{backends, Backend};

    type Svc = ProductoTiendaService<dyn ProductoRepository, dyn TiendaRepository>;

    fn service(b: &Backend) -> Svc { ProductoTiendaService::new(b.productos.clone(), b.tiendas.clone()) }

    /// Five tiendas, all associated with one producto.
    async fn seeded(b: &Backend) -> Result<(Producto, Vec<Tienda>), anyhow::Error> {
        let mut tiendas = Vec::new();
        for i in 0..5 {
            tiendas.push(b.seed_tienda(&format!("Tienda {i}"), "abc").await?);
        }
        let ids: Vec<&str> = tiendas.iter().map(|t| t.id.as_str()).collect();
        let producto = b.seed_producto("Producto base", &ids).await?;
        Ok((producto, tiendas))
    }

    #[tokio::test]
    async fn add_tienda_to_producto() -> Result<(), anyhow::Error> {
        for b in backends().await? {
            let tienda = b.seed_tienda_full("Tienda X", "abc", "Direccion X").await?;
            let producto = b.seed_producto("Producto X", &[]).await?;

            let result = service(&b).add_tienda_to_producto(&producto.id, &tienda.id).await?;
            assert_eq!(result.tiendas.len(), 1);
            assert_eq!(result.tiendas[0].nombre, "Tienda X");
            assert_eq!(result.tiendas[0].ciudad, "abc");
            assert_eq!(result.tiendas[0].direccion, "Direccion X");
        }
        Ok(())
    }

    #[tokio::test]
    async fn add_is_idempotent() -> Result<(), anyhow::Error> {
        for b in backends().await? {
            let tienda = b.seed_tienda("Tienda X", "abc").await?;
            let producto = b.seed_producto("Producto X", &[]).await?;
            let svc = service(&b);
            svc.add_tienda_to_producto(&producto.id, &tienda.id).await?;
            let again = svc.add_tienda_to_producto(&producto.id, &tienda.id).await?;
            assert_eq!(again.tiendas.len(), 1);
            assert_eq!(svc.find_tiendas_by_producto_id(&producto.id).await?.len(), 1);
        }
        Ok(())
    }

    #[tokio::test]
    async fn add_with_unknown_ids() -> Result<(), anyhow::Error> {
        for b in backends().await? {
            let tienda = b.seed_tienda("Tienda X", "abc").await?;
            let producto = b.seed_producto("Producto X", &[]).await?;
            let svc = service(&b);

            let err = svc.add_tienda_to_producto(&producto.id, "0").await.unwrap_err();
            assert_eq!(err, ServiceError::NotFound(TIENDA_NO_EXISTE.into()));
            let err = svc.add_tienda_to_producto("0", &tienda.id).await.unwrap_err();
            assert_eq!(err, ServiceError::NotFound(PRODUCTO_NO_EXISTE.into()));
            // Both unknown: the tienda lookup runs first.
            let err = svc.add_tienda_to_producto("0", "0").await.unwrap_err();
            assert_eq!(err, ServiceError::tienda_not_found());

            assert!(svc.find_tiendas_by_producto_id(&producto.id).await?.is_empty());
        }
        Ok(())
    }

    #[tokio::test]
    async fn error_order_when_both_ids_are_unknown() -> Result<(), anyhow::Error> {
        for b in backends().await? {
            let svc = service(&b);
            let err = svc.find_tienda_by_producto_id_tienda_id("0", "0").await.unwrap_err();
            assert_eq!(err, ServiceError::tienda_not_found());
            let err = svc.delete_tienda_producto("0", "0").await.unwrap_err();
            assert_eq!(err, ServiceError::tienda_not_found());
            // Replacing the whole set resolves the producto first.
            let err = svc.associate_tiendas_producto("0", vec![TiendaRef::from("0")]).await.unwrap_err();
            assert_eq!(err, ServiceError::producto_not_found(), "backend {}", b.name);
        }
        Ok(())
    }

    #[tokio::test]
    async fn find_tienda_by_producto() -> Result<(), anyhow::Error> {
        for b in backends().await? {
            let (producto, tiendas) = seeded(&b).await?;
            let svc = service(&b);
            let stored = svc.find_tienda_by_producto_id_tienda_id(&producto.id, &tiendas[0].id).await?;
            assert_eq!(stored.nombre, tiendas[0].nombre);
            assert_eq!(stored.ciudad, tiendas[0].ciudad);
            assert_eq!(stored.direccion, tiendas[0].direccion);

            let err = svc.find_tienda_by_producto_id_tienda_id(&producto.id, "0").await.unwrap_err();
            assert_eq!(err, ServiceError::tienda_not_found());
            let err = svc.find_tienda_by_producto_id_tienda_id("0", &tiendas[0].id).await.unwrap_err();
            assert_eq!(err, ServiceError::producto_not_found());
        }
        Ok(())
    }

    #[tokio::test]
    async fn find_unassociated_tienda_fails() -> Result<(), anyhow::Error> {
        for b in backends().await? {
            let (producto, _) = seeded(&b).await?;
            let other = b.seed_tienda("Tienda Y", "abc").await?;
            let err = service(&b).find_tienda_by_producto_id_tienda_id(&producto.id, &other.id).await.unwrap_err();
            assert_eq!(err, ServiceError::PreconditionFailed(TIENDA_NO_ASOCIADA.into()));
        }
        Ok(())
    }

    #[tokio::test]
    async fn find_tiendas_by_producto() -> Result<(), anyhow::Error> {
        for b in backends().await? {
            let (producto, _) = seeded(&b).await?;
            let svc = service(&b);
            assert_eq!(svc.find_tiendas_by_producto_id(&producto.id).await?.len(), 5);
            let err = svc.find_tiendas_by_producto_id("0").await.unwrap_err();
            assert_eq!(err, ServiceError::producto_not_found());
        }
        Ok(())
    }

    #[tokio::test]
    async fn associate_replaces_the_whole_set() -> Result<(), anyhow::Error> {
        for b in backends().await? {
            let (producto, _) = seeded(&b).await?;
            let nueva = b.seed_tienda_full("Tienda Y", "abc", "Direccion Y").await?;
            let svc = service(&b);

            let updated = svc.associate_tiendas_producto(&producto.id, vec![TiendaRef::from(nueva.id.as_str())]).await?;
            assert_eq!(updated.tiendas.len(), 1);
            assert_eq!(updated.tiendas[0].nombre, "Tienda Y");
            assert_eq!(updated.tiendas[0].direccion, "Direccion Y");

            svc.associate_tiendas_producto(&producto.id, Vec::new()).await?;
            assert!(svc.find_tiendas_by_producto_id(&producto.id).await?.is_empty());
        }
        Ok(())
    }

    #[tokio::test]
    async fn associate_with_unknown_ids_writes_nothing() -> Result<(), anyhow::Error> {
        for b in backends().await? {
            let (producto, tiendas) = seeded(&b).await?;
            let nueva = b.seed_tienda("Tienda Y", "abc").await?;
            let svc = service(&b);

            let err = svc
                .associate_tiendas_producto("0", vec![TiendaRef::from(nueva.id.as_str())])
                .await
                .unwrap_err();
            assert_eq!(err, ServiceError::producto_not_found());

            let refs = vec![TiendaRef::from(nueva.id.as_str()), TiendaRef::from("0")];
            let err = svc.associate_tiendas_producto(&producto.id, refs).await.unwrap_err();
            assert_eq!(err, ServiceError::tienda_not_found());

            let mut left: Vec<String> = svc
                .find_tiendas_by_producto_id(&producto.id)
                .await?
                .into_iter()
                .map(|t| t.id)
                .collect();
            let mut expected: Vec<String> = tiendas.iter().map(|t| t.id.clone()).collect();
            left.sort();
            expected.sort();
            assert_eq!(left, expected);
        }
        Ok(())
    }

    #[tokio::test]
    async fn delete_tienda_producto() -> Result<(), anyhow::Error> {
        for b in backends().await? {
            let (producto, tiendas) = seeded(&b).await?;
            let svc = service(&b);
            svc.delete_tienda_producto(&producto.id, &tiendas[0].id).await?;

            let stored = b.productos.find_one(&producto.id).await?.expect("producto");
            assert!(stored.tienda(&tiendas[0].id).is_none());
            assert_eq!(stored.tiendas.len(), 4);

            let err = svc.find_tienda_by_producto_id_tienda_id(&producto.id, &tiendas[0].id).await.unwrap_err();
            assert_eq!(err, ServiceError::tienda_not_associated());
        }
        Ok(())
    }

    #[tokio::test]
    async fn delete_with_unknown_or_unassociated_ids() -> Result<(), anyhow::Error> {
        for b in backends().await? {
            let (producto, tiendas) = seeded(&b).await?;
            let otra = b.seed_tienda("Tienda Y", "abc").await?;
            let svc = service(&b);

            let err = svc.delete_tienda_producto(&producto.id, "0").await.unwrap_err();
            assert_eq!(err, ServiceError::tienda_not_found());
            let err = svc.delete_tienda_producto("0", &tiendas[0].id).await.unwrap_err();
            assert_eq!(err, ServiceError::producto_not_found());
            let err = svc.delete_tienda_producto(&producto.id, &otra.id).await.unwrap_err();
            assert_eq!(err, ServiceError::tienda_not_associated());

            assert_eq!(svc.find_tiendas_by_producto_id(&producto.id).await?.len(), 5);
        }
        Ok(())
    }

    #[tokio::test]
    async fn add_remove_find_round() -> Result<(), anyhow::Error> {
        for b in backends().await? {
            let tienda = b.seed_tienda("Tienda X", "abc").await?;
            let producto = b.seed_producto("Producto X", &[]).await?;
            let svc = service(&b);

            svc.add_tienda_to_producto(&producto.id, &tienda.id).await?;
            let found = svc.find_tienda_by_producto_id_tienda_id(&producto.id, &tienda.id).await?;
            assert_eq!(found, tienda.row());

            svc.delete_tienda_producto(&producto.id, &tienda.id).await?;
            let err = svc.find_tienda_by_producto_id_tienda_id(&producto.id, &tienda.id).await.unwrap_err();
            assert!(matches!(err, ServiceError::PreconditionFailed(_)));
        }
        Ok(())
    }

    #[tokio::test]
    async fn clearing_productos_drops_every_pair() -> Result<(), anyhow::Error> {
        for b in backends().await? {
            let (_, tiendas) = seeded(&b).await?;
            b.productos.clear().await?;
            assert!(b.productos.find().await?.is_empty());
            let t = b.tiendas.find_one(&tiendas[0].id).await?.expect("tienda");
            assert!(t.productos.is_empty());

            b.tiendas.clear().await?;
            assert!(b.tiendas.find().await?.is_empty(), "backend {}", b.name);
        }
        Ok(())
    }

    #[tokio::test]
    async fn association_is_visible_from_the_tienda_side() -> Result<(), anyhow::Error> {
        for b in backends().await? {
            let tienda = b.seed_tienda("Tienda X", "abc").await?;
            let producto = b.seed_producto("Producto X", &[]).await?;
            service(&b).add_tienda_to_producto(&producto.id, &tienda.id).await?;

            let t = b.tiendas.find_one(&tienda.id).await?.expect("tienda");
            assert_eq!(t.productos.len(), 1);
            assert_eq!(t.productos[0].id, producto.id);
        }
        Ok(())
    }
}
