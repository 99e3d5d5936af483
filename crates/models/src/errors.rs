use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    /// Structural problem with the input (missing/blank field).
    #[error("validation error: {0}")]
    Validation(String),
    /// Business rule on a field value; surfaces as a precondition failure.
    #[error("{0}")]
    Precondition(String),
    #[error("database error: {0}")]
    Db(String),
}
