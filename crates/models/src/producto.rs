use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, producto_tienda, tienda};

/// Accepted values for `tipo`.
pub const TIPOS: [&str; 2] = ["Perecedero", "No perecedero"];

pub const TIPO_INVALIDO: &str = "El tipo del producto debe ser Perecedero o No perecedero";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "producto")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub nombre: String,
    pub precio: f64,
    pub tipo: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { ProductoTienda }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ProductoTienda => Entity::has_many(producto_tienda::Entity).into(),
        }
    }
}

impl Related<producto_tienda::Entity> for Entity {
    fn to() -> RelationDef { Relation::ProductoTienda.def() }
}

impl Related<tienda::Entity> for Entity {
    fn to() -> RelationDef { producto_tienda::Relation::Tienda.def() }

    fn via() -> Option<RelationDef> { Some(producto_tienda::Relation::Producto.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_nombre(nombre: &str) -> Result<(), ModelError> {
    if nombre.trim().is_empty() {
        return Err(ModelError::Validation("nombre must not be empty".into()));
    }
    Ok(())
}

pub fn validate_precio(precio: f64) -> Result<(), ModelError> {
    if !precio.is_finite() {
        return Err(ModelError::Validation("precio must be a number".into()));
    }
    Ok(())
}

/// `tipo` must be one of [`TIPOS`], compared exactly.
pub fn validate_tipo(tipo: &str) -> Result<(), ModelError> {
    if !TIPOS.contains(&tipo) {
        return Err(ModelError::Precondition(TIPO_INVALIDO.into()));
    }
    Ok(())
}
