//! Shared application state.

use std::sync::Arc;

use greffe_registry::Registry;

/// State handed to every handler. The registry is internally locked, so
/// cloning the state is just an `Arc` bump.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(Registry::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
