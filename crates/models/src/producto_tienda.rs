use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{producto, tienda};

/// One association between a producto and a tienda. No payload.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "producto_tienda")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub producto_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub tienda_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Producto, Tienda }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Producto => Entity::belongs_to(producto::Entity)
                .from(Column::ProductoId)
                .to(producto::Column::Id)
                .into(),
            Relation::Tienda => Entity::belongs_to(tienda::Entity)
                .from(Column::TiendaId)
                .to(tienda::Column::Id)
                .into(),
        }
    }
}

impl Related<producto::Entity> for Entity {
    fn to() -> RelationDef { Relation::Producto.def() }
}

impl Related<tienda::Entity> for Entity {
    fn to() -> RelationDef { Relation::Tienda.def() }
}

impl ActiveModelBehavior for ActiveModel {}
