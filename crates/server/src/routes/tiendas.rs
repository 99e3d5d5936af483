use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use service::domain::{Tienda, TiendaDto};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    get, path = "/tiendas", tag = "tiendas",
    responses((status = 200, description = "List OK", body = [crate::openapi::TiendaDoc]))
)]
pub async fn find_all(State(state): State<ServerState>) -> Result<Json<Vec<Tienda>>, JsonApiError> {
    let list = state.tiendas.find_all().await?;
    info!(count = list.len(), "list tiendas");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/tiendas/{id}", tag = "tiendas",
    params(("id" = String, Path, description = "Tienda ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::TiendaDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn find_one(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Tienda>, JsonApiError> {
    Ok(Json(state.tiendas.find_one(&id).await?))
}

#[utoipa::path(
    post, path = "/tiendas", tag = "tiendas",
    request_body = crate::openapi::TiendaInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::TiendaDoc),
        (status = 400, description = "Bad Request", body = crate::openapi::ErrorBody),
        (status = 412, description = "Invalid ciudad", body = crate::openapi::ErrorBody)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<TiendaDto>, JsonRejection>,
) -> Result<(StatusCode, Json<Tienda>), JsonApiError> {
    let Json(dto) = payload?;
    let created = state.tiendas.create(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/tiendas/{id}", tag = "tiendas",
    params(("id" = String, Path, description = "Tienda ID")),
    request_body = crate::openapi::TiendaInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::TiendaDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody),
        (status = 412, description = "Invalid ciudad", body = crate::openapi::ErrorBody)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<TiendaDto>, JsonRejection>,
) -> Result<Json<Tienda>, JsonApiError> {
    let Json(dto) = payload?;
    Ok(Json(state.tiendas.update(&id, dto).await?))
}

#[utoipa::path(
    delete, path = "/tiendas/{id}", tag = "tiendas",
    params(("id" = String, Path, description = "Tienda ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn remove(State(state): State<ServerState>, Path(id): Path<String>) -> Result<StatusCode, JsonApiError> {
    state.tiendas.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
