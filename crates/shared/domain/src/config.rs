use crate::constants::{LOCAL_PROXY_PATH, PC_BUILDER, PRODUCTION_API};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Feature name to enabled switch.
pub type FlagMap = BTreeMap<String, bool>;

/// Top-level gateway configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfigInner {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub flags: FlagsConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into slices and handlers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    #[serde(flatten, default)]
    inner: Arc<GatewayConfigInner>,
}

impl Deref for GatewayConfig {
    type Target = GatewayConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for GatewayConfig {
    fn deref_mut(&mut self) -> &mut GatewayConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
    /// Tokio worker threads; `None` sizes the pool from available parallelism.
    pub worker_threads: Option<usize>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Where proxied traffic goes and how the upstream host is chosen.
///
/// `base_url` mirrors the `BASE_URL` variable and only affects the gateway itself;
/// `public_base_url` mirrors `NEXT_PUBLIC_BASE_URL` and overrides every resolution.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: Option<String>,
    pub public_base_url: Option<String>,
    pub production_api: String,
    pub production_hosts: Vec<String>,
    pub local_proxy_path: String,
    pub timeout_secs: Option<u64>,
    pub max_upload_bytes: usize,
}

/// Feature flag tables: a fallback table plus one table per client identifier.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FlagsConfig {
    pub default: FlagMap,
    pub clients: BTreeMap<String, FlagMap>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: Option<PathBuf>,
    pub json: bool,
    /// Extra filter directives, e.g. `nshop_proxy=debug,hyper=info`.
    pub filter: Option<String>,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            ssl: None,
            worker_threads: None,
        }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            public_base_url: None,
            production_api: PRODUCTION_API.to_owned(),
            production_hosts: vec!["tratechbd.com".to_owned(), "www.tratechbd.com".to_owned()],
            local_proxy_path: LOCAL_PROXY_PATH.to_owned(),
            timeout_secs: None,
            max_upload_bytes: 64 * 1024 * 1024,
        }
    }
}

impl Default for FlagsConfig {
    fn default() -> Self {
        Self { default: FlagMap::from([(PC_BUILDER.to_owned(), false)]), clients: BTreeMap::new() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false, filter: None }
    }
}
