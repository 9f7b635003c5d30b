//! Relay types: the contact submission, relay errors, and the relay seam.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while forwarding a contact submission.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// A required configuration variable is not set.
    #[error("missing relay config: env var {var} not set")]
    MissingConfig { var: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("relay request failed: {0}")]
    Transport(String),

    /// The relay answered with a non-success status.
    #[error("relay rejected message: status {status}: {text}")]
    Rejected { status: u16, text: String },

    /// No relay is configured for this server.
    #[error("contact relay not configured")]
    NotConfigured,
}

impl RelayError {
    /// Human-readable text shown to the visitor after a failed submission.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Transport(msg) => msg.clone(),
            Self::Rejected { text, .. } => text.clone(),
            other => other.to_string(),
        }
    }
}

// =============================================================================
// SUBMISSION
// =============================================================================

/// Fields captured from the contact form at submit time. Never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

// =============================================================================
// TRAIT
// =============================================================================

/// Outbound email relay used by the contact form.
///
/// Implemented by [`super::EmailJsRelay`] in production and by mocks in
/// tests.
#[async_trait::async_trait]
pub trait ContactRelay: Send + Sync {
    /// Forward one submission. A single attempt; no retry.
    ///
    /// # Errors
    ///
    /// Returns a [`RelayError`] if the relay cannot be reached or rejects the
    /// message.
    async fn send(&self, submission: &ContactSubmission) -> Result<(), RelayError>;
}
