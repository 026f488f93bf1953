#![allow(dead_code)]
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::oneshot;

#[derive(Clone)]
struct CannedResponse {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

#[derive(Clone, Default)]
struct ServerState {
    responses: Arc<Mutex<HashMap<String, CannedResponse>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// In-process catalog CDN answering `/v1/projects/{key}/integrations`.
pub struct MockCatalogServer {
    addr: SocketAddr,
    state: ServerState,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockCatalogServer {
    pub async fn start() -> Result<Self, std::io::Error> {
        let state = ServerState::default();
        let app = Router::new()
            .route("/v1/projects/{write_key}/integrations", get(integrations))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn respond_json(&self, write_key: &str, body: serde_json::Value) {
        self.respond(write_key, StatusCode::OK, body.to_string(), None);
    }

    pub fn respond_status(&self, write_key: &str, status: u16) {
        let status = StatusCode::from_u16(status).unwrap();
        self.respond(write_key, status, "{\"error\":\"mock\"}".to_string(), None);
    }

    pub fn respond_raw(&self, write_key: &str, body: &str) {
        self.respond(write_key, StatusCode::OK, body.to_string(), None);
    }

    pub fn respond_slowly(&self, write_key: &str, body: serde_json::Value, delay: Duration) {
        self.respond(write_key, StatusCode::OK, body.to_string(), Some(delay));
    }

    fn respond(&self, write_key: &str, status: StatusCode, body: String, delay: Option<Duration>) {
        self.state.responses.lock().unwrap().insert(
            write_key.to_string(),
            CannedResponse {
                status,
                body,
                delay,
            },
        );
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockCatalogServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn integrations(
    State(state): State<ServerState>,
    Path(write_key): Path<String>,
) -> Response {
    state.requests.lock().unwrap().push(write_key.clone());

    let canned = state.responses.lock().unwrap().get(&write_key).cloned();
    let Some(canned) = canned else {
        return (StatusCode::NOT_FOUND, "unknown project").into_response();
    };

    if let Some(delay) = canned.delay {
        tokio::time::sleep(delay).await;
    }

    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
        .into_response()
}
