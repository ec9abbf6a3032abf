//! In-process mock of the order-storage API.
//!
//! Serves the documented contract (GET /health, GET/POST /pedidos,
//! PUT/DELETE /pedidos/{id}) over a real socket, records every request it
//! handles, and can be scripted to fail so error paths are reachable in
//! tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::sync::oneshot;

/// One request the mock handled, captured for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
struct MockState {
    records: Vec<Value>,
    next_id: u64,
    captured: Vec<CapturedRequest>,
    fail_next: Option<(u16, Option<String>)>,
    healthy: bool,
}

type Shared = Arc<Mutex<MockState>>;

/// The running mock server. Shuts down when dropped.
pub struct MockApi {
    addr: SocketAddr,
    state: Shared,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl MockApi {
    /// Binds an ephemeral port and serves on a dedicated thread.
    pub fn spawn() -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind mock api");
        listener
            .set_nonblocking(true)
            .expect("set mock api listener nonblocking");
        let addr = listener.local_addr().expect("mock api local addr");

        let state: Shared = Arc::new(Mutex::new(MockState {
            healthy: true,
            ..MockState::default()
        }));
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let router_state = state.clone();
        let thread = std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("mock api runtime");
            runtime.block_on(async move {
                let app = router(router_state);
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("adopt mock api listener");
                axum::serve(listener, app)
                    .with_graceful_shutdown(async move {
                        let _ = shutdown_rx.await;
                    })
                    .await
                    .expect("mock api serve");
            });
        });

        Self {
            addr,
            state,
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
        }
    }

    /// Base URL clients should point at.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Replaces the stored records with the given wire-shaped values.
    pub fn seed(&self, records: Vec<Value>) {
        self.lock().records = records;
    }

    /// Current stored records, in insertion order.
    pub fn records(&self) -> Vec<Value> {
        self.lock().records.clone()
    }

    /// Everything the mock has handled so far.
    pub fn captured(&self) -> Vec<CapturedRequest> {
        self.lock().captured.clone()
    }

    /// Requests captured for one path, e.g. "/pedidos".
    pub fn captured_for(&self, path: &str) -> Vec<CapturedRequest> {
        self.captured()
            .into_iter()
            .filter(|req| req.path == path)
            .collect()
    }

    /// Makes the next /pedidos request (any verb) answer with this status
    /// and, when given, a `{"message": ...}` body.
    pub fn fail_next(&self, status: u16, message: Option<&str>) {
        self.lock().fail_next = Some((status, message.map(str::to_string)));
    }

    /// Controls what /health answers.
    pub fn set_healthy(&self, healthy: bool) {
        self.lock().healthy = healthy;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().expect("mock api state poisoned")
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/pedidos", get(list_orders).post(create_order))
        .route("/pedidos/{id}", put(update_order).delete(delete_order))
        .with_state(state)
}

fn capture(state: &Shared, method: &str, path: String, body: Option<Value>) {
    let mut guard = state.lock().expect("mock api state poisoned");
    guard.captured.push(CapturedRequest {
        method: method.to_string(),
        path,
        body,
    });
}

/// Takes the scripted failure, if one is armed.
fn scripted_failure(state: &Shared) -> Option<(StatusCode, Json<Value>)> {
    let mut guard = state.lock().expect("mock api state poisoned");
    guard.fail_next.take().map(|(status, message)| {
        let body = match message {
            Some(message) => json!({ "message": message }),
            None => json!({}),
        };
        (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(body),
        )
    })
}

fn record_id(record: &Value) -> Option<String> {
    let id = record.get("_id").or_else(|| record.get("id"))?;
    match id {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

async fn health(State(state): State<Shared>) -> (StatusCode, Json<Value>) {
    capture(&state, "GET", "/health".to_string(), None);
    if state.lock().expect("mock api state poisoned").healthy {
        (StatusCode::OK, Json(json!({ "status": "ok" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "message": "service unavailable" })),
        )
    }
}

async fn list_orders(State(state): State<Shared>) -> (StatusCode, Json<Value>) {
    capture(&state, "GET", "/pedidos".to_string(), None);
    if let Some(failure) = scripted_failure(&state) {
        return failure;
    }
    let records = state.lock().expect("mock api state poisoned").records.clone();
    (StatusCode::OK, Json(Value::Array(records)))
}

async fn create_order(
    State(state): State<Shared>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    capture(&state, "POST", "/pedidos".to_string(), Some(body.clone()));
    if let Some(failure) = scripted_failure(&state) {
        return failure;
    }
    let mut guard = state.lock().expect("mock api state poisoned");
    guard.next_id += 1;
    let id = format!("ord-{:04}", guard.next_id);
    let mut record = body;
    if let Some(obj) = record.as_object_mut() {
        obj.insert("_id".to_string(), Value::String(id));
    }
    guard.records.push(record.clone());
    (StatusCode::CREATED, Json(record))
}

async fn update_order(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    capture(
        &state,
        "PUT",
        format!("/pedidos/{}", id),
        Some(body.clone()),
    );
    if let Some(failure) = scripted_failure(&state) {
        return failure;
    }
    let mut guard = state.lock().expect("mock api state poisoned");
    let Some(slot) = guard
        .records
        .iter_mut()
        .find(|record| record_id(record).as_deref() == Some(id.as_str()))
    else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "order not found" })),
        );
    };
    let mut record = body;
    if let Some(obj) = record.as_object_mut() {
        obj.insert("_id".to_string(), Value::String(id));
    }
    *slot = record.clone();
    (StatusCode::OK, Json(record))
}

async fn delete_order(
    State(state): State<Shared>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    capture(&state, "DELETE", format!("/pedidos/{}", id), None);
    if let Some(failure) = scripted_failure(&state) {
        return failure;
    }
    let mut guard = state.lock().expect("mock api state poisoned");
    let before = guard.records.len();
    guard
        .records
        .retain(|record| record_id(record).as_deref() != Some(id.as_str()));
    if guard.records.len() == before {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "order not found" })),
        );
    }
    (StatusCode::OK, Json(json!({ "message": "order deleted" })))
}
