//! In-process stand-in for the notes service, used by tests

use crate::types::Note;
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::CACHE_CONTROL},
    response::{IntoResponse, Response},
    routing,
};
use reqwest::Url;
use serde_json::Value;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

const EPOCH: i64 = 1_735_689_600; // 2025-01-01T00:00:00Z

#[derive(Default)]
struct Store {
    notes: Vec<Note>,
    next_id: i64,
    clock: i64,
    last_body: Option<Value>,
    last_cache_control: Option<String>,
    fail_next: Option<(u16, String)>,
    hello_raw: Option<String>,
}

impl Store {
    fn tick(&mut self) -> String {
        self.clock += 1;
        chrono::DateTime::from_timestamp(EPOCH + self.clock, 0)
            .unwrap()
            .to_rfc3339()
    }

    fn take_failure(&mut self) -> Option<Response> {
        self.fail_next.take().map(|(status, body)| {
            (StatusCode::from_u16(status).unwrap(), body).into_response()
        })
    }
}

type Shared = Arc<Mutex<Store>>;

pub struct StubServer {
    addr: SocketAddr,
    store: Shared,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl StubServer {
    pub async fn start() -> Self {
        let store = Shared::default();
        let app = Router::new()
            .route("/api/notes", routing::get(list).post(create))
            .route("/api/notes/{id}", routing::put(update).delete(remove))
            .route("/api/hello", routing::get(hello))
            .with_state(store.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind stub server.");
        let addr = listener.local_addr().expect("Failed to read stub server address.");
        let (tx, rx) = oneshot::channel();
        let server = axum::serve(listener, app).with_graceful_shutdown(async move {
            let _ = rx.await;
        });
        let handle = tokio::spawn(async move {
            let _ = server.into_future().await;
        });

        Self { addr, store, shutdown: Some(tx), handle: Some(handle) }
    }

    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}/api", self.addr)).unwrap()
    }

    /// JSON body of the most recent POST/PUT
    pub fn last_body(&self) -> Option<Value> {
        self.store.lock().unwrap().last_body.clone()
    }

    pub fn last_cache_control(&self) -> Option<String> {
        self.store.lock().unwrap().last_cache_control.clone()
    }

    /// Answer the next request with `status` and a plain-text body.
    pub fn fail_next(&self, status: u16, body: &str) {
        self.store.lock().unwrap().fail_next = Some((status, body.to_string()));
    }

    /// Serve `body` verbatim from `/hello`.
    pub fn set_hello_raw(&self, body: &str) {
        self.store.lock().unwrap().hello_raw = Some(body.to_string());
    }

    pub fn notes(&self) -> Vec<Note> {
        let mut notes = self.store.lock().unwrap().notes.clone();
        notes.sort_by(|a, b| b.id.cmp(&a.id));
        notes
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "detail": message }))).into_response()
}

fn read_fields(body: &Value) -> Result<(String, String), Response> {
    let field = |name: &str| body.get(name).and_then(Value::as_str).unwrap_or_default().to_string();
    let (title, content) = (field("title"), field("content"));
    if title.trim().is_empty() {
        return Err(detail(StatusCode::BAD_REQUEST, "title is required"));
    }
    if content.trim().is_empty() {
        return Err(detail(StatusCode::BAD_REQUEST, "content is required"));
    }
    Ok((title.trim().to_string(), content.trim().to_string()))
}

async fn list(State(store): State<Shared>, headers: HeaderMap) -> Response {
    let mut store = store.lock().unwrap();
    store.last_cache_control = headers
        .get(CACHE_CONTROL)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    if let Some(failure) = store.take_failure() {
        return failure;
    }

    let mut notes = store.notes.clone();
    notes.sort_by(|a, b| b.id.cmp(&a.id));
    Json(notes).into_response()
}

async fn create(State(store): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut store = store.lock().unwrap();
    store.last_body = Some(body.clone());
    if let Some(failure) = store.take_failure() {
        return failure;
    }
    let (title, content) = match read_fields(&body) {
        Ok(fields) => fields,
        Err(response) => return response,
    };

    store.next_id += 1;
    let now = store.tick();
    let note = Note {
        id: store.next_id,
        title,
        content,
        created_at: now.clone(),
        updated_at: now,
    };
    store.notes.push(note.clone());
    (StatusCode::CREATED, Json(note)).into_response()
}

async fn update(
    State(store): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut store = store.lock().unwrap();
    store.last_body = Some(body.clone());
    if let Some(failure) = store.take_failure() {
        return failure;
    }
    if !store.notes.iter().any(|n| n.id == id) {
        return detail(StatusCode::NOT_FOUND, "not found");
    }
    let (title, content) = match read_fields(&body) {
        Ok(fields) => fields,
        Err(response) => return response,
    };

    let now = store.tick();
    let Some(note) = store.notes.iter_mut().find(|n| n.id == id) else {
        return detail(StatusCode::NOT_FOUND, "not found");
    };
    note.title = title;
    note.content = content;
    note.updated_at = now;
    Json(note.clone()).into_response()
}

async fn remove(State(store): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut store = store.lock().unwrap();
    if let Some(failure) = store.take_failure() {
        return failure;
    }
    let before = store.notes.len();
    store.notes.retain(|n| n.id != id);
    if store.notes.len() == before {
        return detail(StatusCode::NOT_FOUND, "not found");
    }
    Json(serde_json::json!({ "ok": true })).into_response()
}

async fn hello(State(store): State<Shared>) -> Response {
    let mut store = store.lock().unwrap();
    if let Some(failure) = store.take_failure() {
        return failure;
    }
    match store.hello_raw.clone() {
        Some(raw) => (StatusCode::OK, raw).into_response(),
        None => Json(serde_json::json!({ "message": "hello" })).into_response(),
    }
}
