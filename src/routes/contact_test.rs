use super::*;
use std::sync::Arc;

use crate::relay::{ContactRelay, RelayError};

struct StubRelay {
    failure: Option<&'static str>,
}

#[async_trait::async_trait]
impl ContactRelay for StubRelay {
    async fn send(&self, _submission: &ContactSubmission) -> Result<(), RelayError> {
        match self.failure {
            Some(text) => Err(RelayError::Transport(text.to_owned())),
            None => Ok(()),
        }
    }
}

fn state_with(failure: Option<&'static str>) -> AppState {
    AppState::new(Some(Arc::new(StubRelay { failure })))
}

fn filled() -> ContactSubmission {
    ContactSubmission {
        name: "Grace".into(),
        email: "grace@example.com".into(),
        message: "Hello!".into(),
    }
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn form_success_confirms_and_clears() {
    let response = submit_form(State(state_with(None)), Form(filled())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Message sent!"));
    assert!(!html.contains("grace@example.com"));
}

#[tokio::test]
async fn form_failure_reports_and_retains() {
    let response = submit_form(State(state_with(Some("network error"))), Form(filled())).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let html = body_text(response).await;
    assert!(html.contains("Failed to send: network error"));
    assert!(html.contains(r#"value="grace@example.com""#));
    assert!(html.contains(">Hello!</textarea>"));
}

#[tokio::test]
async fn form_without_relay_fails() {
    let response = submit_form(State(AppState::new(None)), Form(filled())).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(body_text(response).await.contains("contact relay not configured"));
}

#[tokio::test]
async fn api_success_replies_sent() {
    let response = submit_api(State(state_with(None)), Json(filled())).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "sent" }));
}

#[tokio::test]
async fn api_failure_replies_with_error_text() {
    let response = submit_api(State(state_with(Some("network error"))), Json(filled())).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "failed", "error": "network error" }));
}
