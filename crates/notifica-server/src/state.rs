use std::sync::Arc;

use notifica_export::pdf::NotificationRenderer;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Read-only after startup; each request renders into its own buffer.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<NotificationRenderer>,
}

impl AppState {
    pub fn new(renderer: NotificationRenderer) -> Self {
        Self {
            renderer: Arc::new(renderer),
        }
    }
}
