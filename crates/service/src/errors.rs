use models::errors::ModelError;
use thiserror::Error;

pub const PRODUCTO_NO_EXISTE: &str = "El producto con el id suministrado no existe";
pub const TIENDA_NO_EXISTE: &str = "La tienda con el id suministrado no existe";
pub const TIENDA_NO_ASOCIADA: &str = "La tienda con el id suministrado no esta asociada al producto";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ServiceError {
    /// A referenced id does not resolve to a stored record.
    #[error("{0}")]
    NotFound(String),
    /// A field rule was violated, or an expected association is missing.
    #[error("{0}")]
    PreconditionFailed(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn producto_not_found() -> Self { Self::NotFound(PRODUCTO_NO_EXISTE.into()) }
    pub fn tienda_not_found() -> Self { Self::NotFound(TIENDA_NO_EXISTE.into()) }
    pub fn tienda_not_associated() -> Self { Self::PreconditionFailed(TIENDA_NO_ASOCIADA.into()) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(m) => ServiceError::Validation(m),
            ModelError::Precondition(m) => ServiceError::PreconditionFailed(m),
            ModelError::Db(m) => ServiceError::Db(m),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}
