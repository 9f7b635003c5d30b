use super::*;
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use serde_json::Value;

use crate::relay::config::RelayTimeouts;

fn test_config(base_url: String) -> RelayConfig {
    RelayConfig {
        service_id: "service_test".into(),
        template_id: "template_test".into(),
        client_key: "public_test".into(),
        base_url,
        timeouts: RelayTimeouts { request_secs: 5, connect_secs: 2 },
    }
}

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        message: "Hello there".into(),
    }
}

/// Serve `router` on an ephemeral local port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[test]
fn endpoint_joins_base_url_and_send_path() {
    let relay = EmailJsRelay::new(test_config("https://api.emailjs.com".into())).unwrap();
    assert_eq!(relay.endpoint(), "https://api.emailjs.com/api/v1.0/email/send");
}

#[test]
fn request_body_carries_credentials_and_fields() {
    let relay = EmailJsRelay::new(test_config("http://unused".into())).unwrap();
    let form = submission();
    let body = serde_json::to_value(relay.request_body(&form)).unwrap();
    assert_eq!(body["service_id"], "service_test");
    assert_eq!(body["template_id"], "template_test");
    assert_eq!(body["user_id"], "public_test");
    assert_eq!(body["template_params"]["name"], "Ada");
    assert_eq!(body["template_params"]["email"], "ada@example.com");
    assert_eq!(body["template_params"]["message"], "Hello there");
}

#[test]
fn rejection_text_prefers_body() {
    assert_eq!(rejection_text(400, "  The Public Key is invalid.\n".into()), "The Public Key is invalid.");
    assert_eq!(rejection_text(503, String::new()), "relay returned status 503");
}

#[tokio::test]
async fn send_posts_json_and_accepts_ok() {
    let captured: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let router = Router::new()
        .route(
            SEND_PATH,
            post(|State(slot): State<Arc<Mutex<Option<Value>>>>, Json(body): Json<Value>| async move {
                *slot.lock().unwrap() = Some(body);
                "OK"
            }),
        )
        .with_state(captured.clone());
    let base_url = serve(router).await;

    let relay = EmailJsRelay::new(test_config(base_url)).unwrap();
    relay.send(&submission()).await.unwrap();

    let body = captured.lock().unwrap().clone().unwrap();
    assert_eq!(body["service_id"], "service_test");
    assert_eq!(body["template_params"]["message"], "Hello there");
}

#[tokio::test]
async fn send_surfaces_rejection_text() {
    let router = Router::new().route(
        SEND_PATH,
        post(|| async { (StatusCode::BAD_REQUEST, "The Public Key is invalid.") }),
    );
    let base_url = serve(router).await;

    let relay = EmailJsRelay::new(test_config(base_url)).unwrap();
    let err = relay.send(&submission()).await.unwrap_err();
    assert!(matches!(err, RelayError::Rejected { status: 400, .. }));
    assert_eq!(err.text(), "The Public Key is invalid.");
}

#[tokio::test]
async fn send_maps_unreachable_relay_to_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let relay = EmailJsRelay::new(test_config(format!("http://{addr}"))).unwrap();
    let err = relay.send(&submission()).await.unwrap_err();
    assert!(matches!(err, RelayError::Transport(_)));
    assert!(!err.text().is_empty());
}
