use std::sync::Arc;

use thoughts_persist::ThoughtStore;

use crate::config::Config;

/// Shared application state passed to all handlers.
///
/// The store is injected at startup as a trait object, so handlers never
/// touch a global connection handle and tests can substitute an in-memory
/// implementation.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn ThoughtStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn ThoughtStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
