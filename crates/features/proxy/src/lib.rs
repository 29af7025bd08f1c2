//! # Upstream proxy
//!
//! The browser never talks to the storefront API directly. Every call goes through
//! `/api/proxy/...`, which this slice forwards to the upstream host and relays back, rewriting
//! bodies that the browser could not otherwise handle (empty successes, non-JSON upload replies)
//! into the gateway [`Envelope`](nshop_domain::envelope::Envelope).
//!
//! * [`resolver`] picks the upstream host for a given execution context.
//! * The generic route forwards any method, path, query, body and `Authorization` header.
//! * The upload routes stream multipart bodies to the two product media endpoints through a
//!   single [`upload::upload`] function driven by an [`upload::UploadRoute`].

mod error;
pub mod forward;
mod relay;
pub mod resolver;
mod routes;
pub mod upload;

pub use crate::error::{ProxyError, ProxyErrorExt};
pub use crate::routes::router;

use nshop_kernel::domain::config::GatewayConfig;
use nshop_kernel::domain::registry::InitializedSlice;

/// Proxy feature state: one pooled HTTP client and the resolved upstream base.
#[nshop_derive::nshop_slice]
pub struct Proxy {
    pub client: reqwest::Client,
    pub base_url: String,
    pub max_upload_bytes: usize,
}

/// Initialize the proxy feature.
///
/// # Errors
/// Returns an error if the HTTP client cannot be constructed (TLS backend failure).
pub fn init(cfg: &GatewayConfig) -> Result<InitializedSlice, ProxyError> {
    let upstream = &cfg.upstream;

    let mut builder = reqwest::Client::builder();
    if let Some(secs) = upstream.timeout_secs {
        builder = builder.timeout(std::time::Duration::from_secs(secs));
    }
    let client = builder.build().context("Failed to build upstream HTTP client")?;

    let base_url = resolver::gateway_base(upstream);
    tracing::info!(base_url = %base_url, timeout = ?upstream.timeout_secs, "Proxy slice initialized");

    let slice = Proxy::new(ProxyInner {
        client,
        base_url,
        max_upload_bytes: upstream.max_upload_bytes,
    });

    Ok(InitializedSlice::new(slice))
}
