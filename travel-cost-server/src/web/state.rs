//! Application state for the web layer.

use std::sync::Arc;

use crate::travel::TravelTimeSource;

/// Shared application state.
///
/// Read-only after startup; each request runs its own calculation.
#[derive(Clone)]
pub struct AppState {
    /// Travel-time lookup (the distance-matrix client in production)
    pub travel: Arc<dyn TravelTimeSource>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(travel: Arc<dyn TravelTimeSource>) -> Self {
        Self { travel }
    }
}
