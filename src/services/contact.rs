//! Contact form submission.
//!
//! One relay call per submission, resolving to exactly one of two outcomes.
//! There is no retry and no deduplication: a double submit sends twice.

use crate::relay::{ContactRelay, ContactSubmission, RelayError};

/// Terminal outcome of a contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    Sent,
    Failed { text: String },
}

impl SubmitResult {
    #[must_use]
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent)
    }

    /// Message shown to the visitor.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Sent => "Message sent!".to_owned(),
            Self::Failed { text } => format!("Failed to send: {text}"),
        }
    }
}

/// Form contents plus the outcome banner to render with them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactSubmission,
    pub outcome: Option<SubmitResult>,
}

impl ContactFormState {
    /// Form state after a submission: cleared when sent, retained on failure
    /// so the visitor can resubmit.
    #[must_use]
    pub fn after(submission: ContactSubmission, outcome: SubmitResult) -> Self {
        let fields = if outcome.is_sent() { ContactSubmission::default() } else { submission };
        Self { fields, outcome: Some(outcome) }
    }
}

/// Forward a submission to the relay, if one is configured.
///
/// Fields are forwarded as entered; empty values are not rejected.
pub async fn submit(relay: Option<&dyn ContactRelay>, submission: &ContactSubmission) -> SubmitResult {
    let Some(relay) = relay else {
        tracing::warn!("contact submission dropped: relay not configured");
        return SubmitResult::Failed { text: RelayError::NotConfigured.text() };
    };

    match relay.send(submission).await {
        Ok(()) => {
            tracing::info!("contact message relayed");
            SubmitResult::Sent
        }
        Err(e) => {
            tracing::warn!(error = %e, "contact relay failed");
            SubmitResult::Failed { text: e.text() }
        }
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
