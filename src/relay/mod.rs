//! Relay: outbound email delivery for the contact form.
//!
//! DESIGN
//! ======
//! The contact service only sees the [`ContactRelay`] trait. Production wires
//! in [`EmailJsRelay`], configured from `EMAILJS_*` environment variables;
//! tests substitute mocks.

pub mod config;
pub mod emailjs;
pub mod types;

use config::RelayConfig;
pub use emailjs::EmailJsRelay;
pub use types::{ContactRelay, ContactSubmission, RelayError};

impl EmailJsRelay {
    /// Build the EmailJS relay from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a credential variable is missing or the HTTP
    /// client fails to build.
    pub fn from_env() -> Result<Self, RelayError> {
        Self::new(RelayConfig::from_env()?)
    }
}
