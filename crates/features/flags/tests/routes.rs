#![cfg(feature = "server")]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use nshop_domain::config::{FlagMap, GatewayConfig};
use nshop_domain::constants::PC_BUILDER;
use nshop_kernel::server::ApiState;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let mut cfg = GatewayConfig::default();
    cfg.flags.clients.insert("acme".to_owned(), FlagMap::from([(PC_BUILDER.to_owned(), true)]));

    let slice = nshop_flags::init(&cfg).expect("flags slice");
    let state = ApiState::builder().config(cfg).register_slice(slice).build().expect("state");

    let (router, _api) = nshop_flags::router().split_for_parts();
    router.with_state(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response =
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn lists_table_for_client() {
    let (status, body) = get(app(), "/api/flags?clientId=acme").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "clientId": "acme", "flags": { "pcBuilder": true } }));

    let (_, body) = get(app(), "/api/flags").await;
    assert_eq!(body, json!({ "clientId": null, "flags": { "pcBuilder": false } }));
}

#[tokio::test]
async fn single_flag_defaults_to_off() {
    let (_, body) = get(app(), "/api/flags/pcBuilder?clientId=acme").await;
    assert_eq!(body, json!({ "feature": "pcBuilder", "enabled": true }));

    let (_, body) = get(app(), "/api/flags/compare?clientId=acme").await;
    assert_eq!(body, json!({ "feature": "compare", "enabled": false }));
}

#[tokio::test]
async fn missing_slice_is_a_server_error() {
    let state = ApiState::builder().config(GatewayConfig::default()).build().expect("state");
    let (router, _) = nshop_flags::router().split_for_parts();

    let (status, body) = get(router.with_state(state), "/api/flags").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
}
