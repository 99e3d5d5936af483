use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use service::domain::{Producto, ProductoDto};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/productos", tag = "productos",
    responses((status = 200, description = "List OK", body = [crate::openapi::ProductoDoc]))
)]
pub async fn find_all(State(state): State<ServerState>) -> Result<Json<Vec<Producto>>, JsonApiError> {
    let list = state.productos.find_all().await?;
    info!(count = list.len(), "list productos");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/productos/{id}", tag = "productos",
    params(("id" = String, Path, description = "Producto ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ProductoDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn find_one(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Producto>, JsonApiError> {
    Ok(Json(state.productos.find_one(&id).await?))
}

#[utoipa::path(
    post, path = "/productos", tag = "productos",
    request_body = crate::openapi::ProductoInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProductoDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorBody),
        (status = 412, description = "Invalid tipo", body = crate::openapi::ErrorBody)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ProductoDto>, JsonRejection>,
) -> Result<(StatusCode, Json<Producto>), JsonApiError> {
    let Json(dto) = payload?;
    let created = state.productos.create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/productos/{id}", tag = "productos",
    params(("id" = String, Path, description = "Producto ID")),
    request_body = crate::openapi::ProductoInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ProductoDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorBody),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody),
        (status = 412, description = "Invalid tipo", body = crate::openapi::ErrorBody)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<ProductoDto>, JsonRejection>,
) -> Result<Json<Producto>, JsonApiError> {
    let Json(dto) = payload?;
    Ok(Json(state.productos.update(&id, dto).await?))
}

#[utoipa::path(
    delete, path = "/productos/{id}", tag = "productos",
    params(("id" = String, Path, description = "Producto ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn remove(State(state): State<ServerState>, Path(id): Path<String>) -> Result<StatusCode, JsonApiError> {
    state.productos.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
