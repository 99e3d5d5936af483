//! Persistent entities for the catalog and the field rules attached to them.
//!
//! `producto` and `tienda` are independent tables keyed by a textual id;
//! `producto_tienda` holds the association as `(producto_id, tienda_id)` pairs.

pub mod errors;
pub mod db;
pub mod producto;
pub mod tienda;
pub mod producto_tienda;
