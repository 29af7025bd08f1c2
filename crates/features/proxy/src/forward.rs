//! Generic forwarding for `ANY /api/proxy/{*path}`.

use crate::error::{ProxyError, ProxyErrorExt};
use crate::relay::{is_json, relay};
use axum::body::to_bytes;
use axum::extract::Request;
use axum::http::{HeaderValue, Method, header};
use axum::response::Response;
use nshop_domain::constants::LOCAL_PROXY_PATH;
use tracing::{debug, info, warn};

/// Body carried to the upstream.
#[derive(Debug, Clone, PartialEq)]
pub enum ForwardBody {
    /// Parsed and re-serialized, so the upstream always sees well-formed JSON.
    Json(serde_json::Value),
    /// Forwarded as-is with the inbound content type.
    Text { content_type: Option<HeaderValue>, text: String },
}

/// One inbound request, translated for the upstream.
#[derive(Debug, Clone)]
pub struct ProxyRequest {
    pub method: Method,
    pub url: String,
    pub authorization: Option<HeaderValue>,
    pub body: Option<ForwardBody>,
}

impl ProxyRequest {
    /// Builds the upstream request from an inbound one.
    ///
    /// The path after `/api/proxy/` and the query string are copied verbatim onto `base`.
    /// Bodies are read for every method except `GET`, `HEAD` and `DELETE`.
    ///
    /// # Errors
    /// [`ProxyError::InvalidBody`] when the client announces JSON that does not parse.
    pub async fn from_inbound(
        base: &str,
        body_limit: usize,
        request: Request,
    ) -> Result<Self, ProxyError> {
        let (parts, body) = request.into_parts();

        let path = parts
            .uri
            .path()
            .strip_prefix(LOCAL_PROXY_PATH)
            .unwrap_or_else(|| parts.uri.path())
            .trim_start_matches('/');
        let url = match parts.uri.query() {
            Some(query) => format!("{base}/{path}?{query}"),
            None => format!("{base}/{path}"),
        };

        let authorization = parts.headers.get(header::AUTHORIZATION).cloned();
        if authorization.is_none() {
            warn!(method = %parts.method, url = %url, "Forwarding request without Authorization header");
        }

        let body = if matches!(parts.method, Method::GET | Method::HEAD | Method::DELETE) {
            None
        } else if is_json(&parts.headers) {
            let bytes = to_bytes(body, body_limit).await.map_err(|e| ProxyError::InvalidBody {
                message: e.to_string().into(),
                context: Some("Reading request body".into()),
            })?;
            let value = serde_json::from_slice(&bytes).map_err(|e| ProxyError::InvalidBody {
                message: e.to_string().into(),
                context: None,
            })?;
            Some(ForwardBody::Json(value))
        } else {
            // Best effort: an unreadable body is dropped, the request still goes out.
            match to_bytes(body, body_limit).await {
                Ok(bytes) if !bytes.is_empty() => Some(ForwardBody::Text {
                    content_type: parts.headers.get(header::CONTENT_TYPE).cloned(),
                    text: String::from_utf8_lossy(&bytes).into_owned(),
                }),
                Ok(_) => None,
                Err(e) => {
                    debug!(error = %e, "Ignoring unreadable request body");
                    None
                },
            }
        };

        Ok(Self { method: parts.method, url, authorization, body })
    }
}

/// Sends the request once and relays the reply. No retries.
pub async fn forward(client: &reqwest::Client, request: ProxyRequest) -> Result<Response, ProxyError> {
    debug!(method = %request.method, url = %request.url, "Forwarding to upstream");

    let mut outbound = client.request(request.method.clone(), &request.url);
    if let Some(auth) = request.authorization {
        outbound = outbound.header(header::AUTHORIZATION, auth);
    }
    outbound = match request.body {
        Some(ForwardBody::Json(value)) => outbound.json(&value),
        Some(ForwardBody::Text { content_type, text }) => {
            let outbound = match content_type {
                Some(ct) => outbound.header(header::CONTENT_TYPE, ct),
                None => outbound,
            };
            outbound.body(text)
        },
        None => outbound,
    };

    let upstream = outbound.send().await.context("Sending request upstream")?;
    info!(method = %request.method, url = %request.url, status = %upstream.status(), "Upstream replied");

    relay(upstream).await
}
