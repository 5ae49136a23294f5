use std::sync::Arc;

use crate::replies::generator::ReplyGenerator;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Both handles are process-wide and shared without locking.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub generator: ReplyGenerator,
}
