//! EmailJS REST client.
//!
//! Posts the contact submission to `/api/v1.0/email/send`. EmailJS answers
//! `200 OK` on success and a plain-text reason otherwise; that text is what
//! the visitor sees.

use std::time::Duration;

use serde::Serialize;

use super::config::{RelayConfig, RelayTimeouts};
use super::types::{ContactRelay, ContactSubmission, RelayError};

const SEND_PATH: &str = "/api/v1.0/email/send";

pub struct EmailJsRelay {
    http: reqwest::Client,
    service_id: String,
    template_id: String,
    client_key: String,
    base_url: String,
}

impl EmailJsRelay {
    /// Build a relay client from typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let http = build_http(config.timeouts)?;
        Ok(Self {
            http,
            service_id: config.service_id,
            template_id: config.template_id,
            client_key: config.client_key,
            base_url: config.base_url,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}{SEND_PATH}", self.base_url)
    }

    fn request_body<'a>(&'a self, submission: &'a ContactSubmission) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.client_key,
            template_params: submission,
        }
    }
}

fn build_http(timeouts: RelayTimeouts) -> Result<reqwest::Client, RelayError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| RelayError::HttpClientBuild(e.to_string()))
}

#[async_trait::async_trait]
impl ContactRelay for EmailJsRelay {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), RelayError> {
        let response = self
            .http
            .post(self.endpoint())
            .json(&self.request_body(submission))
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;
        if status != 200 {
            return Err(RelayError::Rejected { status, text: rejection_text(status, text) });
        }
        Ok(())
    }
}

fn rejection_text(status: u16, body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() { format!("relay returned status {status}") } else { trimmed.to_owned() }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactSubmission,
}

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod tests;
