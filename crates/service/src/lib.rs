//! Service layer for the product/store catalog.
//! - `repository` declares the data-access traits every service is built on.
//! - `repo` holds the SeaORM and in-memory implementations.
//! - The three services enforce field rules and referential integrity
//!   before delegating writes to a repository.

pub mod errors;
pub mod domain;
pub mod repository;
pub mod repo;
pub mod producto_service;
pub mod tienda_service;
pub mod producto_tienda_service;
#[cfg(test)]
pub mod test_support;

pub use producto_service::ProductoService;
pub use producto_tienda_service::ProductoTiendaService;
pub use tienda_service::TiendaService;
