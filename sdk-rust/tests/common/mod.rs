use axum::Router;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Requests captured by a fake server, in arrival order.
pub type Captured = Arc<Mutex<Vec<Value>>>;

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

pub fn captured() -> Captured {
    Arc::new(Mutex::new(Vec::new()))
}
