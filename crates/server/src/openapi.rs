use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub error: String,
    pub message: Option<String>,
}

#[derive(ToSchema)]
pub struct ProductoInputDoc { pub nombre: String, pub precio: f64, pub tipo: String }

#[derive(ToSchema)]
pub struct TiendaInputDoc { pub nombre: String, pub ciudad: String, pub direccion: String }

#[derive(ToSchema)]
pub struct TiendaRefDoc { pub id: String }

#[derive(ToSchema)]
pub struct ProductoRowDoc { pub id: String, pub nombre: String, pub precio: f64, pub tipo: String }

#[derive(ToSchema)]
pub struct TiendaRowDoc { pub id: String, pub nombre: String, pub ciudad: String, pub direccion: String }

#[derive(ToSchema)]
pub struct ProductoDoc {
    pub id: String,
    pub nombre: String,
    pub precio: f64,
    pub tipo: String,
    pub tiendas: Vec<TiendaRowDoc>,
}

#[derive(ToSchema)]
pub struct TiendaDoc {
    pub id: String,
    pub nombre: String,
    pub ciudad: String,
    pub direccion: String,
    pub productos: Vec<ProductoRowDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::productos::find_all,
        crate::routes::productos::find_one,
        crate::routes::productos::create,
        crate::routes::productos::update,
        crate::routes::productos::remove,
        crate::routes::tiendas::find_all,
        crate::routes::tiendas::find_one,
        crate::routes::tiendas::create,
        crate::routes::tiendas::update,
        crate::routes::tiendas::remove,
        crate::routes::producto_tiendas::add_tienda,
        crate::routes::producto_tiendas::find_tienda,
        crate::routes::producto_tiendas::find_tiendas,
        crate::routes::producto_tiendas::associate_tiendas,
        crate::routes::producto_tiendas::delete_tienda,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            ProductoInputDoc,
            TiendaInputDoc,
            TiendaRefDoc,
            ProductoRowDoc,
            TiendaRowDoc,
            ProductoDoc,
            TiendaDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "productos"),
        (name = "tiendas"),
        (name = "producto-tiendas")
    )
)]
pub struct ApiDoc;
