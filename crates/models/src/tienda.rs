use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, producto, producto_tienda};

pub const CIUDAD_LEN: usize = 3;

pub const CIUDAD_INVALIDA: &str = "La ciudad de la tienda debe ser un codigo de 3 caracteres";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tienda")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub nombre: String,
    pub ciudad: String,
    pub direccion: String,
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

impl Related<producto::Entity> for Entity {
    fn to() -> RelationDef { producto_tienda::Relation::Producto.def() }

    fn via() -> Option<RelationDef> { Some(producto_tienda::Relation::Tienda.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_nombre(nombre: &str) -> Result<(), ModelError> {
    if nombre.trim().is_empty() {
        return Err(ModelError::Validation("nombre must not be empty".into()));
    }
    Ok(())
}

/// `ciudad` is a city code of exactly [`CIUDAD_LEN`] characters.
pub fn validate_ciudad(ciudad: &str) -> Result<(), ModelError> {
    if ciudad.chars().count() != CIUDAD_LEN {
        return Err(ModelError::Precondition(CIUDAD_INVALIDA.into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ciudad_must_be_three_chars() {
        assert!(validate_ciudad("BOG").is_ok());
        assert!(validate_ciudad("abc").is_ok());
        assert!(validate_ciudad("Ñuñ").is_ok());
        assert_eq!(validate_ciudad("BOGO"), Err(ModelError::Precondition(CIUDAD_INVALIDA.into())));
        assert_eq!(validate_ciudad("BO"), Err(ModelError::Precondition(CIUDAD_INVALIDA.into())));
        assert!(validate_ciudad("").is_err());
    }
}
