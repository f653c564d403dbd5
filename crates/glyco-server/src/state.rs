use std::sync::Arc;

use crate::screening::Screening;

/// Shared application state, injected into all route handlers via Axum state.
/// Everything inside is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub screening: Arc<Screening>,
}

impl AppState {
    pub fn new(screening: Screening) -> Self {
        Self {
            screening: Arc::new(screening),
        }
    }
}
