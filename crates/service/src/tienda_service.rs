use std::sync::Arc;

use tracing::{info, instrument};

use models::tienda;

use crate::domain::{new_id, Tienda, TiendaDto};
use crate::errors::ServiceError;
use crate::repository::TiendaRepository;

/// CRUD over tiendas with the 3-character `ciudad` rule.
pub struct TiendaService<R: TiendaRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: TiendaRepository + ?Sized> TiendaService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn find_all(&self) -> Result<Vec<Tienda>, ServiceError> {
        self.repo.find().await
    }

    pub async fn find_one(&self, id: &str) -> Result<Tienda, ServiceError> {
        self.repo.find_one(id).await?.ok_or_else(ServiceError::tienda_not_found)
    }

    #[instrument(skip(self, dto), fields(nombre = %dto.nombre, ciudad = %dto.ciudad))]
    pub async fn create(&self, dto: TiendaDto) -> Result<Tienda, ServiceError> {
        dto.validate()?;
        tienda::validate_ciudad(&dto.ciudad)?;
        let tienda = Tienda {
            id: new_id(),
            nombre: dto.nombre,
            ciudad: dto.ciudad,
            direccion: dto.direccion,
            productos: Vec::new(),
        };
        let saved = self.repo.save(tienda).await?;
        info!(id = %saved.id, "tienda_created");
        Ok(saved)
    }

    #[instrument(skip(self, dto))]
    pub async fn update(&self, id: &str, dto: TiendaDto) -> Result<Tienda, ServiceError> {
        dto.validate()?;
        let mut persisted = self.find_one(id).await?;
        tienda::validate_ciudad(&dto.ciudad)?;
        persisted.nombre = dto.nombre;
        persisted.ciudad = dto.ciudad;
        persisted.direccion = dto.direccion;
        let saved = self.repo.save(persisted).await?;
        info!(id = %saved.id, "tienda_updated");
        Ok(saved)
    }

    /// Delete a tienda; its associations go with it.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: &str) -> Result<(), ServiceError> {
        let tienda = self.find_one(id).await?;
        self.repo.remove(&tienda.id).await?;
        info!(id = %tienda.id, "tienda_removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TIENDA_NO_EXISTE;
    use crate::test_support::{backends, tienda_dto};
    use models::tienda::CIUDAD_INVALIDA;

    #[tokio::test]
    async fn tienda_crud_service() -> Result<(), anyhow::Error> {
        for b in backends().await? {
            let svc = TiendaService::new(b.tiendas.clone());
            for i in 0..5 {
                svc.create(tienda_dto(&format!("Tienda {i}"), "abc")).await?;
            }
            let all = svc.find_all().await?;
            assert_eq!(all.len(), 5, "backend {}", b.name);

            let stored = &all[0];
            let found = svc.find_one(&stored.id).await?;
            assert_eq!(found.nombre, stored.nombre);
            assert_eq!(found.ciudad, stored.ciudad);
            assert_eq!(found.direccion, stored.direccion);

            let updated = svc
                .update(&stored.id, TiendaDto { nombre: "New name".into(), ciudad: "xyz".into(), direccion: "New address".into() })
                .await?;
            assert_eq!(updated.nombre, "New name");
            assert_eq!(svc.find_one(&stored.id).await?.direccion, "New address");

            svc.remove(&stored.id).await?;
            let err = svc.find_one(&stored.id).await.unwrap_err();
            assert_eq!(err, ServiceError::NotFound(TIENDA_NO_EXISTE.into()));
        }
        Ok(())
    }

    #[tokio::test]
    async fn create_with_bad_ciudad_fails() -> Result<(), anyhow::Error> {
        for b in backends().await? {
            let svc = TiendaService::new(b.tiendas.clone());
            for ciudad in ["abcd", "ab", ""] {
                let err = svc.create(tienda_dto("Tienda X", ciudad)).await.unwrap_err();
                assert_eq!(err, ServiceError::PreconditionFailed(CIUDAD_INVALIDA.into()));
                assert_eq!(err.to_string(), "La ciudad de la tienda debe ser un codigo de 3 caracteres");
            }
            assert!(svc.find_all().await?.is_empty());
        }
        Ok(())
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_everywhere() -> Result<(), anyhow::Error> {
        for b in backends().await? {
            let svc = TiendaService::new(b.tiendas.clone());
            assert_eq!(svc.find_one("0").await.unwrap_err(), ServiceError::tienda_not_found());
            assert_eq!(svc.update("0", tienda_dto("X", "abc")).await.unwrap_err(), ServiceError::tienda_not_found());
            assert_eq!(svc.remove("0").await.unwrap_err(), ServiceError::tienda_not_found());
        }
        Ok(())
    }

    #[tokio::test]
    async fn find_one_loads_productos() -> Result<(), anyhow::Error> {
        for b in backends().await? {
            let t = b.seed_tienda("Tienda A", "abc").await?;
            let p = b.seed_producto("Pan", &[&t.id]).await?;
            let svc = TiendaService::new(b.tiendas.clone());
            let found = svc.find_one(&t.id).await?;
            assert_eq!(found.productos.len(), 1);
            assert_eq!(found.productos[0].id, p.id);
        }
        Ok(())
    }

    #[tokio::test]
    async fn removing_tienda_detaches_it_from_productos() -> Result<(), anyhow::Error> {
        for b in backends().await? {
            let t1 = b.seed_tienda("Tienda A", "abc").await?;
            let t2 = b.seed_tienda("Tienda B", "def").await?;
            let p = b.seed_producto("Pan", &[&t1.id, &t2.id]).await?;
            TiendaService::new(b.tiendas.clone()).remove(&t1.id).await?;
            let left = b.productos.find_one(&p.id).await?.expect("producto");
            assert_eq!(left.tienda_ids(), vec![t2.id.clone()]);
        }
        Ok(())
    }
}
