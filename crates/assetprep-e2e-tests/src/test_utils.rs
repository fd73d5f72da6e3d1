use axum::Router;
use axum::body::Body;
use axum::extract::{Path as UrlPath, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use eyre::Result;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Local HTTP server standing in for a release host.
///
/// - `/models/{size}` serves `size` bytes with a `Content-Length` header.
/// - `/stream/{size}` serves `size` bytes as a chunked body without `Content-Length`.
/// - `/status/{code}` answers with the given status code.
pub struct TestServer {
    addr: SocketAddr,
    requests: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        let requests = Arc::new(AtomicUsize::new(0));
        let app = Router::new()
            .route("/models/:size", get(serve_model))
            .route("/stream/:size", get(serve_stream))
            .route("/status/:code", get(serve_status))
            .with_state(requests.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, app).await {
                tracing::error!("Test server stopped: {}", err);
            }
        });

        Ok(Self {
            addr,
            requests,
            handle,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn model_bytes(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 251) as u8).collect()
}

async fn serve_model(
    State(requests): State<Arc<AtomicUsize>>,
    UrlPath(size): UrlPath<usize>,
) -> Response {
    requests.fetch_add(1, Ordering::SeqCst);
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (header::CONTENT_LENGTH, size.to_string()),
        ],
        model_bytes(size),
    )
        .into_response()
}

async fn serve_stream(
    State(requests): State<Arc<AtomicUsize>>,
    UrlPath(size): UrlPath<usize>,
) -> Response {
    requests.fetch_add(1, Ordering::SeqCst);
    let chunks = model_bytes(size)
        .chunks(1000)
        .map(|chunk| Ok::<_, std::io::Error>(chunk.to_vec()))
        .collect::<Vec<_>>();
    Body::from_stream(futures::stream::iter(chunks)).into_response()
}

async fn serve_status(
    State(requests): State<Arc<AtomicUsize>>,
    UrlPath(code): UrlPath<u16>,
) -> Response {
    requests.fetch_add(1, Ordering::SeqCst);
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, "release asset unavailable").into_response()
}

/// Writes `assets-config.yml` into `dir` with the given entries, in order.
pub fn write_assets_config(dir: &Path, entries: &[(&str, &str)]) -> Result<()> {
    let contents = entries
        .iter()
        .map(|(key, value)| format!("{}: {}\n", yaml_string(key), yaml_string(value)))
        .collect::<String>();
    std::fs::write(dir.join("assets-config.yml"), contents)?;
    Ok(())
}

fn yaml_string(value: &str) -> String {
    // Numbers and other scalars are written as-is.
    if value.parse::<i64>().is_ok() || value == "true" || value == "false" {
        value.to_string()
    } else {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
