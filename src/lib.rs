//! # Natal Planets Service
//!
//! A thin HTTP proxy over the JPL Horizons ephemeris API. Given a birth
//! timestamp and observer coordinates, the service queries Horizons once per
//! celestial body and returns each body's ecliptic longitude as a formatted
//! string. All orbital computation is delegated to Horizons; this crate only
//! builds queries, paces requests, and extracts one numeric field from the
//! plain-text replies.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`bodies`]: Fixed registry of tracked celestial bodies and their
//!   Horizons identifiers
//! - [`horizons`]: Query construction, text-response parsing, and the
//!   reqwest-backed client for the upstream API
//! - [`services`]: Sequential fetch orchestration with rate-limit pacing
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`config`]: Server configuration read once from the environment

pub mod bodies;
pub mod config;
pub mod horizons;
pub mod http;
pub mod services;
