//! API base-URL resolution.
//!
//! Precedence, highest first:
//! 1. the public override (`NEXT_PUBLIC_BASE_URL`);
//! 2. a browser on one of the production hostnames talks to the production API directly;
//! 3. any other browser goes through the same-origin proxy path;
//! 4. server-side code talks to the production API.

use nshop_domain::config::UpstreamConfig;

/// Where the caller is executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context<'a> {
    /// Client side; `hostname` is the page's hostname without port.
    Browser { hostname: &'a str },
    Server,
}

/// Never fails: an unrecognised context falls through to a fixed default.
#[must_use]
pub fn resolve(cfg: &UpstreamConfig, context: Context<'_>) -> String {
    if let Some(public) = non_empty(cfg.public_base_url.as_deref()) {
        return public.to_owned();
    }

    match context {
        Context::Browser { hostname } if is_production_host(cfg, hostname) => {
            cfg.production_api.clone()
        },
        Context::Browser { .. } => cfg.local_proxy_path.clone(),
        Context::Server => cfg.production_api.clone(),
    }
}

/// Base the gateway itself forwards to: `BASE_URL` when set, else the server-side resolution.
/// Trailing slashes are dropped so the base can be joined with `/{path}`.
#[must_use]
pub fn gateway_base(cfg: &UpstreamConfig) -> String {
    let base = non_empty(cfg.base_url.as_deref())
        .map_or_else(|| resolve(cfg, Context::Server), ToOwned::to_owned);
    base.trim_end_matches('/').to_owned()
}

fn is_production_host(cfg: &UpstreamConfig, hostname: &str) -> bool {
    cfg.production_hosts.iter().any(|host| host.eq_ignore_ascii_case(hostname))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
