//! Application state for the HTTP server.

use std::sync::Arc;
use std::time::Duration;

use crate::horizons::EphemerisSource;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of per-body longitudes (the Horizons client in production).
    pub source: Arc<dyn EphemerisSource>,
    /// Pause between consecutive upstream calls within one request.
    pub pacing: Duration,
}

impl AppState {
    /// Create a new application state with the given ephemeris source.
    pub fn new(source: Arc<dyn EphemerisSource>, pacing: Duration) -> Self {
        Self { source, pacing }
    }
}
