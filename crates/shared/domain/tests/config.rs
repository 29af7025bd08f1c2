use nshop_domain::config::{GatewayConfig, ServerConfig, UpstreamConfig};
use nshop_domain::constants::PC_BUILDER;
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 3000);
    assert!(server.ssl.is_none());
    assert!(server.worker_threads.is_none());

    let upstream = UpstreamConfig::default();
    assert_eq!(upstream.production_api, "https://api.tratechbd.com");
    assert_eq!(upstream.local_proxy_path, "/api/proxy");
    assert!(upstream.base_url.is_none());
    assert!(upstream.public_base_url.is_none());
    assert!(upstream.production_hosts.iter().any(|h| h == "tratechbd.com"));

    let cfg = GatewayConfig::default();
    assert_eq!(cfg.flags.default.get(PC_BUILDER), Some(&false));
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn gateway_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "upstream": { "base_url": "http://127.0.0.1:9000", "timeout_secs": 5 },
        "flags": {
            "default": { "pcBuilder": false },
            "clients": { "acme": { "pcBuilder": true } }
        },
        "logging": { "level": "debug", "json": true }
    });

    let cfg: GatewayConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.upstream.base_url.as_deref(), Some("http://127.0.0.1:9000"));
    assert_eq!(cfg.upstream.timeout_secs, Some(5));
    // Fields not present fall back to defaults.
    assert_eq!(cfg.upstream.production_api, "https://api.tratechbd.com");
    assert_eq!(cfg.flags.clients["acme"].get(PC_BUILDER), Some(&true));
    assert!(cfg.logging.json);
}

#[test]
fn deref_mut_copies_on_write() {
    let original = GatewayConfig::default();
    let mut edited = original.clone();
    edited.server.port = 9999;

    assert_eq!(original.server.port, 3000);
    assert_eq!(edited.server.port, 9999);
}
