use crate::error::{ProxyError, ProxyErrorExt};
use axum::Json;
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use nshop_domain::envelope::Envelope;

pub(crate) fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
}

/// Turns an upstream reply into the gateway response.
///
/// * `200`/`204` with an empty body becomes the "completed" envelope with `200`.
/// * JSON is parsed and returned with the upstream status.
/// * Anything else is passed through as text with the upstream status and content type.
pub(crate) async fn relay(upstream: reqwest::Response) -> Result<Response, ProxyError> {
    let status = upstream.status();
    let headers = upstream.headers().clone();
    let bytes = upstream.bytes().await.context("Reading upstream body")?;

    if bytes.is_empty() && matches!(status, StatusCode::OK | StatusCode::NO_CONTENT) {
        return Ok((StatusCode::OK, Json(Envelope::completed())).into_response());
    }

    if is_json(&headers) {
        let value: serde_json::Value =
            serde_json::from_slice(&bytes).context("Upstream sent malformed JSON")?;
        return Ok((status, Json(value)).into_response());
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("text/plain; charset=utf-8"));
    let text = String::from_utf8_lossy(&bytes).into_owned();

    Ok((status, [(header::CONTENT_TYPE, content_type)], text).into_response())
}
