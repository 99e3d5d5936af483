//! Aggregates returned by the services and the inputs they accept.
//!
//! A `Producto` carries the full set of tiendas it is associated with; a
//! `Tienda` carries the inverse set. Relations are loaded one level deep.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use models::{errors::ModelError, producto, tienda};

/// Fresh opaque identifier for a new record.
pub fn new_id() -> String { Uuid::new_v4().to_string() }

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Producto {
    pub id: String,
    pub nombre: String,
    pub precio: f64,
    pub tipo: String,
    #[serde(default)]
    pub tiendas: Vec<tienda::Model>,
}

impl Producto {
    pub fn from_parts(row: producto::Model, tiendas: Vec<tienda::Model>) -> Self {
        Self { id: row.id, nombre: row.nombre, precio: row.precio, tipo: row.tipo, tiendas }
    }

    pub fn row(&self) -> producto::Model {
        producto::Model {
            id: self.id.clone(),
            nombre: self.nombre.clone(),
            precio: self.precio,
            tipo: self.tipo.clone(),
        }
    }

    /// The associated tienda with this id, if any.
    pub fn tienda(&self, tienda_id: &str) -> Option<&tienda::Model> {
        self.tiendas.iter().find(|t| t.id == tienda_id)
    }

    /// Associated tienda ids in order, first occurrence wins.
    pub fn tienda_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::with_capacity(self.tiendas.len());
        for t in &self.tiendas {
            if !ids.contains(&t.id) {
                ids.push(t.id.clone());
            }
        }
        ids
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tienda {
    pub id: String,
    pub nombre: String,
    pub ciudad: String,
    pub direccion: String,
    #[serde(default)]
    pub productos: Vec<producto::Model>,
}

impl Tienda {
    pub fn from_parts(row: tienda::Model, productos: Vec<producto::Model>) -> Self {
        Self { id: row.id, nombre: row.nombre, ciudad: row.ciudad, direccion: row.direccion, productos }
    }

    pub fn row(&self) -> tienda::Model {
        tienda::Model {
            id: self.id.clone(),
            nombre: self.nombre.clone(),
            ciudad: self.ciudad.clone(),
            direccion: self.direccion.clone(),
        }
    }

    pub fn into_row(self) -> tienda::Model {
        tienda::Model { id: self.id, nombre: self.nombre, ciudad: self.ciudad, direccion: self.direccion }
    }
}

/// Body of `POST /productos` and `PUT /productos/:id`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductoDto {
    pub nombre: String,
    pub precio: f64,
    pub tipo: String,
}

impl ProductoDto {
    /// Structural checks only; the `tipo` label rule is applied by the service.
    pub fn validate(&self) -> Result<(), ModelError> {
        producto::validate_nombre(&self.nombre)?;
        producto::validate_precio(self.precio)?;
        if self.tipo.is_empty() {
            return Err(ModelError::Validation("tipo must not be empty".into()));
        }
        Ok(())
    }
}

/// Body of `POST /tiendas` and `PUT /tiendas/:id`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TiendaDto {
    pub nombre: String,
    pub ciudad: String,
    pub direccion: String,
}

impl TiendaDto {
    /// Structural checks only; the `ciudad` length rule is applied by the service.
    /// `direccion` is free text and may be empty.
    pub fn validate(&self) -> Result<(), ModelError> {
        tienda::validate_nombre(&self.nombre)
    }
}

/// Element of the `PUT /productos/:id/tiendas` body. Only `id` is read;
/// any other tienda fields sent along are ignored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TiendaRef {
    pub id: String,
}

impl From<&str> for TiendaRef {
    fn from(id: &str) -> Self { Self { id: id.to_string() } }
}
