//! Multipart upload forwarding.
//!
//! Both media routes share [`upload`]; what differs is the upstream path and how a non-JSON
//! reply is treated, captured by [`UploadRoute`].

use crate::error::ProxyError;
use crate::relay::is_json;
use axum::Json;
use axum::body::to_bytes;
use axum::extract::Request;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use nshop_domain::constants::{IMAGE_UPLOAD_PATH, VIDEO_UPLOAD_PATH};
use nshop_domain::envelope::Envelope;
use tracing::{info, warn};

/// How to treat an upstream reply that is not JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponsePolicy {
    /// Non-JSON is a gateway failure (502).
    JsonOnly,
    /// Non-JSON text is the stored file's URL; answer `200 {success, fileUrl}`.
    FileUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadRoute {
    pub upstream_path: &'static str,
    pub policy: ResponsePolicy,
    pub failure_message: &'static str,
}

pub const IMAGE: UploadRoute = UploadRoute {
    upstream_path: IMAGE_UPLOAD_PATH,
    policy: ResponsePolicy::JsonOnly,
    failure_message: "Failed to upload image",
};

pub const VIDEO: UploadRoute = UploadRoute {
    upstream_path: VIDEO_UPLOAD_PATH,
    policy: ResponsePolicy::FileUrl,
    failure_message: "Failed to upload video",
};

/// Forwards a multipart upload byte-for-byte, boundary included.
///
/// # Errors
/// * [`ProxyError::Unauthorized`] without an `Authorization` header, before any upstream call.
/// * [`ProxyError::InvalidForm`] when the body is not `multipart/form-data` or cannot be read.
/// * [`ProxyError::Upload`] on transport failure.
/// * [`ProxyError::BadGateway`] for a non-JSON reply under [`ResponsePolicy::JsonOnly`].
pub async fn upload(
    client: &reqwest::Client,
    base: &str,
    route: &UploadRoute,
    body_limit: usize,
    request: Request,
) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();

    let authorization = parts
        .headers
        .get(header::AUTHORIZATION)
        .cloned()
        .ok_or(ProxyError::Unauthorized { context: Some(route.upstream_path.into()) })?;

    let content_type = parts
        .headers
        .get(header::CONTENT_TYPE)
        .filter(|ct| {
            ct.to_str().is_ok_and(|v| v.to_ascii_lowercase().starts_with("multipart/form-data"))
        })
        .cloned()
        .ok_or_else(|| ProxyError::InvalidForm {
            message: "expected multipart/form-data".into(),
            context: Some(route.upstream_path.into()),
        })?;

    let bytes = to_bytes(body, body_limit).await.map_err(|e| ProxyError::InvalidForm {
        message: e.to_string().into(),
        context: Some(route.upstream_path.into()),
    })?;

    let url = format!("{base}{}", route.upstream_path);
    info!(url = %url, size = bytes.len(), "Forwarding upload");

    let failed = |e: reqwest::Error| {
        warn!(url = %url, error = %e, "Upload to upstream failed");
        ProxyError::Upload { message: route.failure_message.into(), context: Some(url.clone().into()) }
    };

    let upstream = client
        .post(&url)
        .header(header::AUTHORIZATION, authorization)
        .header(header::CONTENT_TYPE, content_type)
        .body(bytes)
        .send()
        .await
        .map_err(failed)?;

    let status = upstream.status();
    let json = is_json(upstream.headers());
    let reply = upstream.bytes().await.map_err(failed)?;

    if json {
        let value: serde_json::Value =
            serde_json::from_slice(&reply).map_err(|e| ProxyError::Upload {
                message: route.failure_message.into(),
                context: Some(e.to_string().into()),
            })?;
        return Ok((status, Json(value)).into_response());
    }

    match route.policy {
        ResponsePolicy::FileUrl => {
            let file_url = String::from_utf8_lossy(&reply).trim().to_owned();
            Ok((StatusCode::OK, Json(Envelope::file_url(file_url))).into_response())
        },
        ResponsePolicy::JsonOnly => Err(ProxyError::BadGateway {
            message: "Upstream returned a non-JSON response".into(),
            context: Some(format!("{} answered {status}", route.upstream_path).into()),
        }),
    }
}
