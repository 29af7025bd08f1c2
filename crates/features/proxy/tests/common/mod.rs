#![allow(dead_code, unreachable_pub)]

use axum::Router;
use axum::body::{Body, Bytes, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, Method, Uri, header};
use axum::middleware::{Next, from_fn_with_state};
use axum::response::Response;
use axum::Json;
use nshop_kernel::domain::config::GatewayConfig;
use nshop_kernel::server::ApiState;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::net::TcpListener;

/// Throwaway upstream on an ephemeral port. Returns its base URL and a hit counter.
pub async fn spawn_upstream(routes: Router) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = routes.layer(from_fn_with_state(Arc::clone(&hits), count_hits));

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind upstream");
    let addr = listener.local_addr().expect("upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("upstream server");
    });

    (format!("http://{addr}"), hits)
}

async fn count_hits(State(hits): State<Arc<AtomicUsize>>, request: Request, next: Next) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    next.run(request).await
}

/// Reflects what the upstream received.
pub async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<Value> {
    let header = |name| headers.get(name).and_then(|v| v.to_str().ok()).map(ToOwned::to_owned);
    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "authorization": header(header::AUTHORIZATION),
        "contentType": header(header::CONTENT_TYPE),
        "body": String::from_utf8_lossy(&body),
    }))
}

pub fn gateway(base_url: &str) -> Router {
    let mut cfg = GatewayConfig::default();
    cfg.upstream.base_url = Some(base_url.to_owned());

    let slice = nshop_proxy::init(&cfg).expect("proxy slice");
    let state = ApiState::builder().config(cfg).register_slice(slice).build().expect("state");

    nshop_proxy::router().with_state(state)
}

pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

pub fn empty() -> Body {
    Body::empty()
}
