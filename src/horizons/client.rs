//! Transport to the Horizons API.
//!
//! [`EphemerisSource`] is the seam the orchestrator fetches through; tests
//! substitute their own implementation, production uses the reqwest-backed
//! [`HorizonsClient`].

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use super::parse::parse_longitude;
use super::query::{build_url, EphemerisRequest};
use crate::bodies::Body;

/// Failure of one upstream fetch. Never aborts a chart; the orchestrator
/// converts it into the per-body failure marker.
#[derive(Debug, Error)]
pub enum HorizonsError {
    /// Connection failure, timeout, or invalid URL.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Horizons answered with a non-success status.
    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),
}

/// Source of per-body ecliptic longitudes.
///
/// `Ok(None)` means the source answered but reported no ephemeris for the
/// query — a normal outcome, distinct from a transport failure.
#[async_trait]
pub trait EphemerisSource: Send + Sync {
    async fn fetch_longitude(
        &self,
        body: &Body,
        request: &EphemerisRequest,
    ) -> Result<Option<f64>, HorizonsError>;
}

/// Production source backed by the Horizons API.
pub struct HorizonsClient {
    http: reqwest::Client,
}

impl HorizonsClient {
    /// Create a client with the given per-request timeout.
    pub fn new(timeout: Duration) -> Result<Self, HorizonsError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl EphemerisSource for HorizonsClient {
    async fn fetch_longitude(
        &self,
        body: &Body,
        request: &EphemerisRequest,
    ) -> Result<Option<f64>, HorizonsError> {
        let url = build_url(body.horizons_id, request);
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(HorizonsError::Status(response.status()));
        }
        let text = response.text().await?;
        Ok(parse_longitude(&text))
    }
}
