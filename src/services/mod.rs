//! Service layer orchestrating per-body fetches into one chart.

pub mod chart;

pub use chart::{compute_chart, DEFAULT_PACING};
