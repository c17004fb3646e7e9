//! Application state.

use std::sync::Arc;

use crate::dispatcher::Dispatcher;

/// State shared by the HTTP adapter.
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    /// Largest request body read before the request is rejected.
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(dispatcher: Arc<Dispatcher>, max_body_bytes: usize) -> Self {
        Self {
            dispatcher,
            max_body_bytes,
        }
    }
}
