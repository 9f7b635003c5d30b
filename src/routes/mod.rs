//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the two page routes, the contact endpoints and a health check under
//! one Axum router. Anything else falls through to the static asset
//! directory (project images, the resume, favicons, the stylesheet).

pub mod contact;
pub mod pages;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState, assets_dir: &Path) -> Router {
    Router::new()
        .route("/", get(pages::landing))
        .route("/projects/{id}", get(pages::project))
        .route("/contact", post(contact::submit_form))
        .route("/api/contact", post(contact::submit_api))
        .route("/healthz", get(healthz))
        .fallback_service(ServeDir::new(assets_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
