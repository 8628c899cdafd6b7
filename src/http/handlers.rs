//! HTTP handlers for the REST API.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::AppError;
use super::state::AppState;
use crate::horizons::EphemerisRequest;
use crate::services::compute_chart;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Query parameters for `/api/planets`.
///
/// All fields are optional strings so that presence can be validated with
/// the exact error contract; `lat`/`lon` are parsed explicitly below.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PlanetsQuery {
    #[serde(default)]
    pub birth: Option<String>,
    #[serde(default)]
    pub lat: Option<String>,
    #[serde(default)]
    pub lon: Option<String>,
}

/// GET /api/planets
///
/// Queries Horizons once per registry body and returns a JSON object with
/// exactly one key per body, in registry order. Each value is either the
/// body's ecliptic longitude rendered to two decimals with a degree suffix,
/// or the literal `"Error"` when that body's fetch failed.
pub async fn get_planets(
    State(state): State<AppState>,
    Query(params): Query<PlanetsQuery>,
) -> HandlerResult<serde_json::Map<String, Value>> {
    let (Some(birth), Some(lat), Some(lon)) = (
        required(params.birth),
        required(params.lat),
        required(params.lon),
    ) else {
        return Err(AppError::MissingParameters);
    };
    let latitude: f64 = lat
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid parameter: lat must be a decimal number".to_string()))?;
    let longitude: f64 = lon
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid parameter: lon must be a decimal number".to_string()))?;

    let request = EphemerisRequest::new(birth, latitude, longitude);
    let chart = compute_chart(state.source.as_ref(), &request, state.pacing).await;

    let mut results = serde_json::Map::new();
    for (name, longitude) in chart {
        results.insert(name.to_string(), Value::String(render_longitude(longitude)));
    }
    Ok(Json(results))
}

/// An empty or whitespace-only value counts as a missing parameter, same as
/// an absent one.
fn required(param: Option<String>) -> Option<String> {
    param.filter(|value| !value.trim().is_empty())
}

fn render_longitude(longitude: Option<f64>) -> String {
    match longitude {
        Some(degrees) => format!("{degrees:.2}°"),
        None => "Error".to_string(),
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version
    pub version: String,
}

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
