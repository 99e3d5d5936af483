pub mod producto_tiendas;
pub mod productos;
pub mod tiendas;

use axum::{middleware, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::{metrics, openapi::ApiDoc, state::ServerState};

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: catalog routes plus health, metrics and docs.
/// Producto routes share the `:productoId` segment name; the router rejects
/// differently named parameters at the same position.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let catalog = Router::new()
        .route("/productos", get(productos::find_all).post(productos::create))
        .route(
            "/productos/:productoId",
            get(productos::find_one).put(productos::update).delete(productos::remove),
        )
        .route(
            "/productos/:productoId/tiendas",
            get(producto_tiendas::find_tiendas).put(producto_tiendas::associate_tiendas),
        )
        .route(
            "/productos/:productoId/tiendas/:tiendaId",
            get(producto_tiendas::find_tienda)
                .post(producto_tiendas::add_tienda)
                .delete(producto_tiendas::delete_tienda),
        )
        .route("/tiendas", get(tiendas::find_all).post(tiendas::create))
        .route(
            "/tiendas/:id",
            get(tiendas::find_one).put(tiendas::update).delete(tiendas::remove),
        )
        .route_layer(middleware::from_fn(metrics::track_metrics))
        .with_state(state);

    let ops = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics))
        .route("/api-docs/openapi.json", get(openapi_json));

    catalog
        .merge(ops)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
