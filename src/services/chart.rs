//! Sequential fetch orchestration.
//!
//! One chart means one Horizons round trip per registry body, strictly in
//! registry order, with a pause between consecutive calls. Horizons has an
//! undocumented rate limit; concurrent fetches would defeat the pacing, so
//! the loop is deliberately sequential and trades latency for reliability
//! (10 calls plus 9 pauses dominate request time).

use std::time::Duration;

use tracing::{debug, warn};

use crate::bodies::BODIES;
use crate::horizons::{EphemerisRequest, EphemerisSource};

/// Default pause between consecutive Horizons calls.
pub const DEFAULT_PACING: Duration = Duration::from_millis(200);

/// Fetch the longitude of every registry body for one chart.
///
/// Each body fully resolves (value, no data, or failure) before the next
/// fetch starts. Failures never abort the loop: they are converted to `None`
/// at the fetch site, so the result always covers all registry bodies, in
/// registry order.
pub async fn compute_chart(
    source: &dyn EphemerisSource,
    request: &EphemerisRequest,
    pacing: Duration,
) -> Vec<(&'static str, Option<f64>)> {
    let mut chart = Vec::with_capacity(BODIES.len());
    for (i, body) in BODIES.iter().enumerate() {
        if i > 0 && !pacing.is_zero() {
            tokio::time::sleep(pacing).await;
        }
        let longitude = match source.fetch_longitude(body, request).await {
            Ok(Some(degrees)) => Some(degrees),
            Ok(None) => {
                debug!(body = body.name, "no ephemeris data");
                None
            }
            Err(e) => {
                warn!(body = body.name, error = %e, "fetch failed");
                None
            }
        };
        chart.push((body.name, longitude));
    }
    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::Body;
    use crate::horizons::HorizonsError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedSource {
        calls: Mutex<Vec<&'static str>>,
    }

    #[async_trait]
    impl EphemerisSource for ScriptedSource {
        async fn fetch_longitude(
            &self,
            body: &Body,
            _request: &EphemerisRequest,
        ) -> Result<Option<f64>, HorizonsError> {
            self.calls.lock().unwrap().push(body.name);
            match body.name {
                "Moon" => Ok(None),
                "Mars" => Err(HorizonsError::Status(
                    reqwest::StatusCode::SERVICE_UNAVAILABLE,
                )),
                _ => Ok(Some(123.456)),
            }
        }
    }

    #[tokio::test]
    async fn failures_become_markers_without_aborting() {
        let source = ScriptedSource { calls: Mutex::new(Vec::new()) };
        let request = EphemerisRequest::new("2024-01-01T12:00:00", 0.0, 0.0);

        let chart = compute_chart(&source, &request, Duration::ZERO).await;

        assert_eq!(chart.len(), BODIES.len());
        for (name, longitude) in &chart {
            match *name {
                "Moon" | "Mars" => assert_eq!(*longitude, None),
                _ => assert_eq!(*longitude, Some(123.456)),
            }
        }
    }

    #[tokio::test]
    async fn bodies_resolve_in_registry_order() {
        let source = ScriptedSource { calls: Mutex::new(Vec::new()) };
        let request = EphemerisRequest::new("2024-01-01T12:00:00", 0.0, 0.0);

        let chart = compute_chart(&source, &request, Duration::ZERO).await;

        let expected: Vec<&str> = BODIES.iter().map(|b| b.name).collect();
        assert_eq!(*source.calls.lock().unwrap(), expected);
        let returned: Vec<&str> = chart.iter().map(|(name, _)| *name).collect();
        assert_eq!(returned, expected);
    }

    #[tokio::test(start_paused = true)]
    async fn consecutive_fetches_are_paced() {
        struct TimedSource {
            stamps: Mutex<Vec<tokio::time::Instant>>,
        }

        #[async_trait]
        impl EphemerisSource for TimedSource {
            async fn fetch_longitude(
                &self,
                _body: &Body,
                _request: &EphemerisRequest,
            ) -> Result<Option<f64>, HorizonsError> {
                self.stamps.lock().unwrap().push(tokio::time::Instant::now());
                Ok(Some(1.0))
            }
        }

        let source = TimedSource { stamps: Mutex::new(Vec::new()) };
        let request = EphemerisRequest::new("2024-01-01T12:00:00", 0.0, 0.0);

        compute_chart(&source, &request, DEFAULT_PACING).await;

        let stamps = source.stamps.lock().unwrap();
        assert_eq!(stamps.len(), BODIES.len());
        for pair in stamps.windows(2) {
            assert!(pair[1] - pair[0] >= DEFAULT_PACING);
        }
    }
}
