//! Association routes nested under a producto.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use models::tienda;
use service::domain::{Producto, TiendaRef};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    post, path = "/productos/{productoId}/tiendas/{tiendaId}", tag = "producto-tiendas",
    params(
        ("productoId" = String, Path, description = "Producto ID"),
        ("tiendaId" = String, Path, description = "Tienda ID")
    ),
    responses(
        (status = 201, description = "Associated", body = crate::openapi::ProductoDoc),
        (status = 404, description = "Producto or tienda not found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn add_tienda(
    State(state): State<ServerState>,
    Path((producto_id, tienda_id)): Path<(String, String)>,
) -> Result<(StatusCode, Json<Producto>), JsonApiError> {
    let producto = state.producto_tiendas.add_tienda_to_producto(&producto_id, &tienda_id).await?;
    Ok((StatusCode::CREATED, Json(producto)))
}

#[utoipa::path(
    get, path = "/productos/{productoId}/tiendas/{tiendaId}", tag = "producto-tiendas",
    params(
        ("productoId" = String, Path, description = "Producto ID"),
        ("tiendaId" = String, Path, description = "Tienda ID")
    ),
    responses(
        (status = 200, description = "OK", body = crate::openapi::TiendaRowDoc),
        (status = 404, description = "Producto or tienda not found", body = crate::openapi::ErrorBody),
        (status = 412, description = "Tienda not associated", body = crate::openapi::ErrorBody)
    )
)]
pub async fn find_tienda(
    State(state): State<ServerState>,
    Path((producto_id, tienda_id)): Path<(String, String)>,
) -> Result<Json<tienda::Model>, JsonApiError> {
    let tienda = state
        .producto_tiendas
        .find_tienda_by_producto_id_tienda_id(&producto_id, &tienda_id)
        .await?;
    Ok(Json(tienda))
}

#[utoipa::path(
    get, path = "/productos/{productoId}/tiendas", tag = "producto-tiendas",
    params(("productoId" = String, Path, description = "Producto ID")),
    responses(
        (status = 200, description = "OK", body = [crate::openapi::TiendaRowDoc]),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn find_tiendas(
    State(state): State<ServerState>,
    Path(producto_id): Path<String>,
) -> Result<Json<Vec<tienda::Model>>, JsonApiError> {
    Ok(Json(state.producto_tiendas.find_tiendas_by_producto_id(&producto_id).await?))
}

#[utoipa::path(
    put, path = "/productos/{productoId}/tiendas", tag = "producto-tiendas",
    params(("productoId" = String, Path, description = "Producto ID")),
    request_body = [crate::openapi::TiendaRefDoc],
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::ProductoDoc),
        (status = 404, description = "Producto or tienda not found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn associate_tiendas(
    State(state): State<ServerState>,
    Path(producto_id): Path<String>,
    payload: Result<Json<Vec<TiendaRef>>, JsonRejection>,
) -> Result<Json<Producto>, JsonApiError> {
    let Json(tiendas) = payload?;
    Ok(Json(state.producto_tiendas.associate_tiendas_producto(&producto_id, tiendas).await?))
}

#[utoipa::path(
    delete, path = "/productos/{productoId}/tiendas/{tiendaId}", tag = "producto-tiendas",
    params(
        ("productoId" = String, Path, description = "Producto ID"),
        ("tiendaId" = String, Path, description = "Tienda ID")
    ),
    responses(
        (status = 204, description = "Removed"),
        (status = 404, description = "Producto or tienda not found", body = crate::openapi::ErrorBody),
        (status = 412, description = "Tienda not associated", body = crate::openapi::ErrorBody)
    )
)]
pub async fn delete_tienda(
    State(state): State<ServerState>,
    Path((producto_id, tienda_id)): Path<(String, String)>,
) -> Result<StatusCode, JsonApiError> {
    state.producto_tiendas.delete_tienda_producto(&producto_id, &tienda_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
