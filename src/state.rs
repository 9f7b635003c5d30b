//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Project data is compiled in, so the only runtime dependency it carries
//! is the optional contact relay.

use std::sync::Arc;

use crate::relay::ContactRelay;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the relay is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Optional contact relay. `None` if `EMAILJS_*` env vars are not configured.
    pub relay: Option<Arc<dyn ContactRelay>>,
}

impl AppState {
    #[must_use]
    pub fn new(relay: Option<Arc<dyn ContactRelay>>) -> Self {
        Self { relay }
    }

    #[must_use]
    pub fn relay(&self) -> Option<&dyn ContactRelay> {
        self.relay.as_deref()
    }
}
