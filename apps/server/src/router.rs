use axum::Router;
use nshop::features::{flags, proxy};
use nshop::kernel::server::ApiState;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(title = "NextShop Gateway"))]
struct ApiDoc;

/// Builds the gateway router: documented routes, the proxy routes and the Scalar UI at `/api`.
pub fn init(state: ApiState) -> Router {
    let api = ApiDoc::openapi();

    // Separate the OpenAPI routes and the API documentation object
    let (openapi_routes, api_doc) = OpenApiRouter::with_openapi(api)
        .merge(nshop::server::router::system_router())
        .merge(flags::router())
        .split_for_parts();

    let scalar_routes = Scalar::with_url("/api", api_doc);

    Router::new()
        .merge(openapi_routes)
        .merge(proxy::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .merge(scalar_routes)
}
