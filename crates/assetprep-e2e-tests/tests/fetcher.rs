use assetprep_e2e_tests::{TestServer, init_tracing, model_bytes};
use assetprep_lib::AssetPrepError;
use assetprep_lib::download::{ProgressMode, build_http_client, fetch_asset};

#[tokio::test]
async fn test_fetch_creates_parent_directories() {
    init_tracing();
    let server = TestServer::start().await.expect("Failed to start server");
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let client = build_http_client().unwrap();
    let destination = temp_dir.path().join("deeply/nested/ml/model.tflite");

    let fetched = fetch_asset(
        &client,
        &server.url("/models/10000"),
        &destination,
        ProgressMode::Hidden,
    )
    .await
    .expect("Download should succeed");

    assert_eq!(fetched.path, destination);
    assert_eq!(fetched.bytes_written, 10000);
    assert_eq!(fetched.content_length, Some(10000));
    assert_eq!(std::fs::read(&destination).unwrap(), model_bytes(10000));
}

#[tokio::test]
async fn test_fetch_overwrites_existing_file() {
    init_tracing();
    let server = TestServer::start().await.expect("Failed to start server");
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let client = build_http_client().unwrap();
    let destination = temp_dir.path().join("model.tflite");
    std::fs::write(&destination, vec![0xff; 50000]).unwrap();

    fetch_asset(
        &client,
        &server.url("/models/16"),
        &destination,
        ProgressMode::Hidden,
    )
    .await
    .unwrap();

    assert_eq!(std::fs::read(&destination).unwrap(), model_bytes(16));
}

#[tokio::test]
async fn test_fetch_reports_http_status() {
    init_tracing();
    let server = TestServer::start().await.expect("Failed to start server");
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let client = build_http_client().unwrap();
    let destination = temp_dir.path().join("ml/model.tflite");

    let err = fetch_asset(
        &client,
        &server.url("/status/404"),
        &destination,
        ProgressMode::Hidden,
    )
    .await
    .unwrap_err();

    match err {
        AssetPrepError::HttpStatus { status, url } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(url, server.url("/status/404"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!destination.exists());
    assert_eq!(server.request_count(), 1);
}

#[tokio::test]
async fn test_fetch_rejects_invalid_url() {
    init_tracing();
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let client = build_http_client().unwrap();

    let err = fetch_asset(
        &client,
        "http://",
        &temp_dir.path().join("model.tflite"),
        ProgressMode::Hidden,
    )
    .await
    .unwrap_err();

    assert!(
        matches!(err, AssetPrepError::InvalidUrl { .. }),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_fetch_reports_connection_failure() {
    init_tracing();
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let client = build_http_client().unwrap();
    // Bind and drop a listener to get a port nothing is listening on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let err = fetch_asset(
        &client,
        &format!("http://127.0.0.1:{port}/models/10"),
        &temp_dir.path().join("model.tflite"),
        ProgressMode::Hidden,
    )
    .await
    .unwrap_err();

    assert!(
        matches!(err, AssetPrepError::Http(_)),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_fetch_reports_short_body() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    init_tracing();
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let client = build_http_client().unwrap();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    // Declares 100 bytes, sends 5, then hangs up.
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = vec![0u8; 4096];
        let _ = socket.read(&mut request).await.unwrap();
        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\nshort")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });
    let destination = temp_dir.path().join("ml/truncated.tflite");

    let err = fetch_asset(
        &client,
        &format!("http://{addr}/models/100"),
        &destination,
        ProgressMode::Hidden,
    )
    .await
    .unwrap_err();
    server.await.unwrap();

    match err {
        AssetPrepError::IncompleteBody {
            expected, received, ..
        } => {
            assert_eq!(expected, 100);
            assert!(received <= 5, "received {received} bytes");
            // The partial file stays on disk.
            let partial = std::fs::read(&destination).unwrap();
            assert_eq!(partial.len() as u64, received);
            assert!(b"short".starts_with(&partial));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
