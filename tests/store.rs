use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use vendor_detail::config::StoreConfig;
use vendor_detail::models::{FETCH_ERROR_MESSAGE, NO_DATA_MESSAGE};
use vendor_detail::{load, Error, FetchState, FirebaseStore, RecordStore, VendorService, VendorView};

/// Answers exactly one request with the given status line and body, and returns the raw request.
async fn respond_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{}", addr), handle)
}

fn store(base_url: String) -> FirebaseStore {
    FirebaseStore::new(&StoreConfig {
        base_url,
        ..StoreConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn object_body_loads_record() {
    let (base_url, server) =
        respond_once("200 OK", r#"{"vendorName":"Acme Co","email":"a@x.com"}"#).await;

    let record = store(base_url).fetch_vendor("v123").await.unwrap().unwrap();
    assert_eq!(record.get("vendorName"), Some("Acme Co"));
    assert_eq!(record.get("email"), Some("a@x.com"));

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /vendors/v123/vendorInfo.json "));
}

#[tokio::test]
async fn empty_object_and_null_are_empty() {
    for body in ["{}", "null"] {
        let (base_url, server) = respond_once("200 OK", body).await;
        assert!(store(base_url).fetch_vendor("v999").await.unwrap().is_none());
        server.await.unwrap();
    }
}

#[tokio::test]
async fn not_found_is_empty() {
    let (base_url, server) = respond_once("404 Not Found", "").await;
    assert!(store(base_url).fetch_vendor("v404").await.unwrap().is_none());
    server.await.unwrap();
}

#[tokio::test]
async fn server_error_is_a_status_failure() {
    let (base_url, server) = respond_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
    let err = store(base_url).fetch_vendor("v500").await.unwrap_err();
    assert!(matches!(err, Error::Status(status) if status.as_u16() == 500));
    server.await.unwrap();
}

#[tokio::test]
async fn malformed_body_fails() {
    let (base_url, server) = respond_once("200 OK", "<html>oops</html>").await;
    assert!(store(base_url).fetch_vendor("v1").await.is_err());
    server.await.unwrap();
}

#[tokio::test]
async fn view_over_http_shows_exact_messages() {
    let (base_url, server) = respond_once("200 OK", "{}").await;
    let service = VendorService::new(Arc::new(store(base_url)));
    let view = Mutex::new(VendorView::new());

    assert!(load(&view, &service, "v999").await.unwrap());
    assert_eq!(view.lock().await.state(), &FetchState::Empty);
    assert_eq!(view.lock().await.state().message(), Some(NO_DATA_MESSAGE));
    server.await.unwrap();

    let (base_url, server) = respond_once("503 Service Unavailable", "").await;
    let service = VendorService::new(Arc::new(store(base_url)));
    assert!(load(&view, &service, "v1").await.unwrap());
    assert_eq!(view.lock().await.state().message(), Some(FETCH_ERROR_MESSAGE));
    server.await.unwrap();
}

#[tokio::test]
async fn refused_connection_fails() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = VendorService::new(Arc::new(store(format!("http://{}", addr))));
    match service.fetch("v1").await {
        FetchState::Failed { message, cause } => {
            assert_eq!(message, FETCH_ERROR_MESSAGE);
            assert!(!cause.is_empty());
        }
        other => panic!("expected failure, got {other:?}"),
    }
}
