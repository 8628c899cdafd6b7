//! Horizons query construction.
//!
//! Pure URL building, no I/O. The request asks Horizons for a single-step
//! observer-table ephemeris (one-minute step) for one body, centered on a
//! topocentric coordinate on Earth (`coord@399`).

use chrono::{Duration, NaiveDateTime};

/// Base endpoint of the Horizons API.
pub const HORIZONS_API_URL: &str = "https://ssd.jpl.nasa.gov/api/horizons.api";

/// Timestamp format Horizons expects: space-separated, minute precision.
const TIME_FMT: &str = "%Y-%m-%d %H:%M";

/// Input forms accepted for the birth instant.
const BIRTH_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// One chart request: the birth instant as supplied by the caller plus the
/// observer's location. Not validated here; a malformed birth string surfaces
/// downstream as a parse failure on the Horizons reply.
#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisRequest {
    pub birth: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

impl EphemerisRequest {
    pub fn new(birth: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            birth: birth.into(),
            latitude,
            longitude,
            elevation: 0.0,
        }
    }
}

/// Normalize the birth instant into the (start, stop) window for the query.
///
/// Stop is start + 60 seconds: Horizons rejects a zero-length window, and
/// with a one-minute step the first data row is the row at start, which is
/// the row the parser selects. When the input matches none of the accepted
/// forms it is passed through with `T` replaced by a space, for both ends of
/// the window; Horizons then reports no ephemeris and the body resolves to
/// the failure marker.
pub(crate) fn query_window(birth: &str) -> (String, String) {
    let trimmed = birth.trim();
    for fmt in BIRTH_FORMATS {
        if let Ok(instant) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            let start = instant.format(TIME_FMT).to_string();
            let stop = (instant + Duration::seconds(60)).format(TIME_FMT).to_string();
            return (start, stop);
        }
    }
    let fallback = trimmed.replace('T', " ");
    (fallback.clone(), fallback)
}

/// Build the full Horizons URL for one body.
///
/// `QUANTITIES='1'` selects the observer-table column whose third
/// whitespace-delimited field on each data row carries the longitude in
/// decimal degrees. Values are wrapped in single quotes as the API requires;
/// reqwest percent-encodes the spaces when the URL is parsed.
pub fn build_url(horizons_id: &str, request: &EphemerisRequest) -> String {
    let (start, stop) = query_window(&request.birth);
    let center = format!(
        "coord@399,{},{},{}",
        request.latitude, request.longitude, request.elevation
    );
    format!(
        "{HORIZONS_API_URL}?format=text&COMMAND='{horizons_id}'&OBJ_DATA='NO'&MAKE_EPHEM='YES'\
         &EPHEM_TYPE='OBSERVER'&CENTER='{center}'&START_TIME='{start}'&STOP_TIME='{stop}'\
         &STEP_SIZE='1 m'&QUANTITIES='1'"
    )
}
