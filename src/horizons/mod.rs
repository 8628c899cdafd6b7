//! Client layer for the JPL Horizons ephemeris API.
//!
//! Horizons is queried over HTTP with query-string parameters and answers
//! with a semi-structured plain-text document. This module splits the round
//! trip into three pieces so the pure parts stay unit-testable without a
//! network:
//!
//! - [`query`]: builds the request URL for one body at one instant
//! - [`parse`]: extracts the longitude from the text reply
//! - [`client`]: the reqwest-backed transport behind the [`EphemerisSource`]
//!   trait seam

pub mod client;
pub mod parse;
pub mod query;

pub use client::{EphemerisSource, HorizonsClient, HorizonsError};
pub use parse::parse_longitude;
pub use query::{build_url, EphemerisRequest};
