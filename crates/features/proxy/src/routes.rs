use crate::error::ProxyError;
use crate::forward::{ProxyRequest, forward};
use crate::upload::{self, UploadRoute, upload};
use crate::Proxy;
use axum::Router;
use axum::extract::{Request, State};
use axum::response::Response;
use axum::routing::{any, post};
use nshop_domain::constants::{IMAGE_UPLOAD_PATH, LOCAL_PROXY_PATH, VIDEO_UPLOAD_PATH};
use nshop_kernel::server::ApiState;

/// Proxy routes. The wildcard cannot be described in OpenAPI, so these stay on a plain router.
pub fn router() -> Router<ApiState> {
    Router::new()
        .route(&format!("{LOCAL_PROXY_PATH}{IMAGE_UPLOAD_PATH}"), post(upload_image))
        .route(&format!("{LOCAL_PROXY_PATH}{VIDEO_UPLOAD_PATH}"), post(upload_video))
        .route(&format!("{LOCAL_PROXY_PATH}/{{*path}}"), any(proxy))
}

async fn proxy(State(state): State<ApiState>, request: Request) -> Result<Response, ProxyError> {
    let slice = state.try_get_slice::<Proxy>()?;
    let outbound = ProxyRequest::from_inbound(&slice.base_url, slice.max_upload_bytes, request).await?;
    forward(&slice.client, outbound).await
}

async fn upload_image(State(state): State<ApiState>, request: Request) -> Result<Response, ProxyError> {
    upload_with(&state, &upload::IMAGE, request).await
}

async fn upload_video(State(state): State<ApiState>, request: Request) -> Result<Response, ProxyError> {
    upload_with(&state, &upload::VIDEO, request).await
}

async fn upload_with(
    state: &ApiState,
    route: &UploadRoute,
    request: Request,
) -> Result<Response, ProxyError> {
    let slice = state.try_get_slice::<Proxy>()?;
    upload(&slice.client, &slice.base_url, route, slice.max_upload_bytes, request).await
}
