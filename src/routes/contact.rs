//! Contact routes: HTML form post and JSON API.

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use serde::Serialize;

use crate::relay::ContactSubmission;
use crate::services::contact::{self, ContactFormState, SubmitResult};
use crate::state::AppState;
use crate::views;

/// JSON reply for `POST /api/contact`.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ContactReply {
    Sent,
    Failed { error: String },
}

fn outcome_status(outcome: &SubmitResult) -> StatusCode {
    if outcome.is_sent() { StatusCode::OK } else { StatusCode::BAD_GATEWAY }
}

/// `POST /contact`: relay the form, then re-render the landing page with
/// the outcome. Fields are kept on failure so the visitor can resubmit.
pub async fn submit_form(State(state): State<AppState>, Form(form): Form<ContactSubmission>) -> Response {
    let outcome = contact::submit(state.relay(), &form).await;
    let status = outcome_status(&outcome);
    let page = views::render_landing(&ContactFormState::after(form, outcome));
    (status, Html(page)).into_response()
}

/// `POST /api/contact`: relay a JSON submission.
pub async fn submit_api(State(state): State<AppState>, Json(form): Json<ContactSubmission>) -> Response {
    let outcome = contact::submit(state.relay(), &form).await;
    let status = outcome_status(&outcome);
    let reply = match outcome {
        SubmitResult::Sent => ContactReply::Sent,
        SubmitResult::Failed { text } => ContactReply::Failed { error: text },
    };
    (status, Json(reply)).into_response()
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
