//! Parsing of Horizons plain-text replies.
//!
//! The reply embeds ephemeris rows between `$$SOE` and `$$EOE` markers. The
//! format is semi-structured text without a stable schema, so parsing is
//! defensive: anything that does not look like a data row yields `None`
//! ("no data"), which is a normal outcome (for example an invalid time
//! range), never an error.

const SOE: &str = "$$SOE";
const EOE: &str = "$$EOE";

/// Extract the longitude from a Horizons text reply.
///
/// Takes the first data row between the markers and reads its third
/// whitespace-delimited field as decimal degrees. Returns `None` when the
/// block is absent, empty, or the field is not a finite number.
pub fn parse_longitude(text: &str) -> Option<f64> {
    let block_start = text.find(SOE)? + SOE.len();
    let block_end = block_start + text[block_start..].find(EOE)?;
    let first_row = text[block_start..block_end].trim().lines().next()?;

    let value: f64 = first_row.split_whitespace().nth(2)?.parse().ok()?;
    value.is_finite().then_some(value)
}
