#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    dead_code,
    missing_docs,
    clippy::expect_used
)]
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use anyhow::Context;
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::IntoResponse;
use serde_json::{Value, json};
use tokio::sync::oneshot;
use tracing::info;

use flarekit_core::CloudflareAccess;

/// Path prefix mimicking the real API.
pub const API_PREFIX: &str = "/client/v4";

/// What the server saw for one request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: String,
}

type Recorded = Arc<Mutex<Vec<RecordedRequest>>>;

/// Local Cloudflare look-alike.
///
/// Every request is recorded and echoed back in the `result` of a success
/// envelope, except:
/// - `/zones/missing` answers 404 with a failure envelope
/// - `/zones/garbage` answers 200 with a non JSON body
#[derive(Debug)]
pub struct TestServer {
    addr: SocketAddr,
    recorded: Recorded,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    pub fn start() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").context("bind local port")?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;

        let recorded = Recorded::default();
        let app = Router::new()
            .fallback(echo)
            .with_state(Arc::clone(&recorded));

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .context("create server runtime")?;
        let (shutdown, signal) = oneshot::channel::<()>();

        let handle = std::thread::spawn(move || {
            runtime.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("valid listener");
                info!(?listener, "launching server");
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = signal.await;
                    })
                    .await
                    .expect("server running");
            });
        });

        Ok(Self {
            addr,
            recorded,
            shutdown: Some(shutdown),
            handle: Some(handle),
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}{API_PREFIX}/", self.addr)
    }

    pub fn access(&self) -> CloudflareAccess {
        CloudflareAccess::builder()
            .with_base_url(&self.base_url())
            .expect("valid base url")
            .with_api_token("integration-token")
            .build()
            .expect("should build access")
    }

    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().expect("lock not poisoned").clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.recorded()
            .pop()
            .expect("at least one request received")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

async fn echo(
    State(recorded): State<Recorded>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let path = uri.path().to_string();
    let query = uri.query().map(ToString::to_string);

    let (status, payload) = match path.strip_prefix(API_PREFIX) {
        Some("/zones/missing") => (
            StatusCode::NOT_FOUND,
            json!({
                "success": false,
                "errors": [{ "code": 7003, "message": "Could not route to /zones/missing" }],
                "messages": [],
                "result": null
            })
            .to_string(),
        ),
        Some("/zones/garbage") => (StatusCode::OK, "<html>not json</html>".to_string()),
        _ => (
            StatusCode::OK,
            json!({
                "success": true,
                "errors": [],
                "messages": [],
                "result": {
                    "method": method.as_str(),
                    "path": path,
                    "query": query,
                    "body": serde_json::from_str::<Value>(&body).ok(),
                }
            })
            .to_string(),
        ),
    };

    recorded
        .lock()
        .expect("lock not poisoned")
        .push(RecordedRequest {
            method,
            path,
            query,
            headers,
            body,
        });

    (status, [(header::CONTENT_TYPE, "application/json")], payload)
}
