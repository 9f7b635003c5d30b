//! Page routes: landing and project detail.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::catalog;
use crate::services::contact::ContactFormState;
use crate::views;

/// `GET /`: landing page with an empty contact form.
pub async fn landing() -> Html<String> {
    Html(views::render_landing(&ContactFormState::default()))
}

/// `GET /projects/{id}`: project detail, or the not-found page with 404.
pub async fn project(Path(id): Path<String>) -> Response {
    let Some(detail) = catalog::project_detail(&id).found() else {
        tracing::debug!(%id, "project lookup missed");
        return (StatusCode::NOT_FOUND, Html(views::render_not_found())).into_response();
    };
    Html(views::render_detail(detail)).into_response()
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
