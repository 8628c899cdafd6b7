//! Server configuration and environment variable handling.

use std::env;
use std::time::Duration;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host (default: 0.0.0.0)
    pub host: String,
    /// Bind port (default: 3000)
    pub port: u16,
    /// If set, CORS is restricted to this single origin; otherwise any
    /// origin is allowed.
    pub allowed_origin: Option<String>,
    /// Pause between consecutive Horizons requests within one chart.
    pub pacing: Duration,
    /// Per-request timeout for upstream Horizons calls.
    pub request_timeout: Duration,
}

impl ServerConfig {
    /// Create a new server configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0): bind host
    /// - `PORT` (optional, default: 3000): bind port
    /// - `ALLOWED_ORIGIN` (optional): restrict CORS to one origin
    /// - `HORIZONS_PACING_MS` (optional, default: 200): inter-request pause
    /// - `HORIZONS_TIMEOUT_SECS` (optional, default: 10): upstream timeout
    ///
    /// # Errors
    /// Returns an error if `PORT` is set to something that is not a valid
    /// port number.
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| "PORT must be a valid port number".to_string())?;
        let allowed_origin = env::var("ALLOWED_ORIGIN").ok().filter(|s| !s.is_empty());
        let pacing_ms = env::var("HORIZONS_PACING_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(200);
        let timeout_secs = env::var("HORIZONS_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            host,
            port,
            allowed_origin,
            pacing: Duration::from_millis(pacing_ms),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Socket address string the server should bind to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
