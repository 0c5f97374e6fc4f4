//! Router and request handlers.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use pillion_core::{Route as DrivingRoute, SearchResult, ThreeWordAddress};

use crate::directions::{parse_lon_lat, resolve_route};
use crate::error::{require_param, ApiError};
use crate::search::aggregate_search;
use crate::state::AppState;

/// Build the application router.
///
/// CORS is permissive: the mobile client is served from a different
/// origin and every endpoint here is read-only.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/search", get(search))
        .route("/api/directions", get(directions))
        .route("/api/w3w/search", get(w3w_search))
        .route("/api/w3w/convert", get(w3w_convert))
        .route("/api/config/maps", get(maps_config))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    query: String,
}

#[derive(Debug, Deserialize)]
struct ConvertParams {
    #[serde(default)]
    words: String,
}

#[derive(Debug, Deserialize)]
struct DirectionsParams {
    #[serde(default)]
    origin: String,
    #[serde(default)]
    destination: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct MapsConfigResponse {
    #[serde(rename = "googleMapsApiKey")]
    google_maps_api_key: Option<String>,
    #[serde(rename = "w3wApiKey")]
    w3w_api_key: Option<String>,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let query = require_param(&params.query, "query")?;
    Ok(Json(aggregate_search(&state, query).await))
}

async fn directions(
    State(state): State<AppState>,
    Query(params): Query<DirectionsParams>,
) -> Result<Json<Option<DrivingRoute>>, ApiError> {
    let origin = require_param(&params.origin, "origin")?;
    let destination = require_param(&params.destination, "destination")?;

    let origin = parse_lon_lat(origin)
        .ok_or_else(|| ApiError::BadRequest("origin must be lon,lat".to_owned()))?;
    let destination = parse_lon_lat(destination)
        .ok_or_else(|| ApiError::BadRequest("destination must be lon,lat".to_owned()))?;

    // None serializes as a JSON null body with status 200.
    Ok(Json(resolve_route(&state, origin, destination).await))
}

async fn w3w_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<ThreeWordAddress>>, ApiError> {
    let query = require_param(&params.query, "query")?;
    let suggestions = state
        .three_words
        .suggest(query)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;
    Ok(Json(suggestions))
}

async fn w3w_convert(
    State(state): State<AppState>,
    Query(params): Query<ConvertParams>,
) -> Result<Json<ThreeWordAddress>, ApiError> {
    let words = require_param(&params.words, "words")?;
    let address = state
        .three_words
        .convert(words)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?
        .ok_or_else(|| ApiError::BadRequest("words is not a three-word address".to_owned()))?;
    Ok(Json(address))
}

async fn maps_config(State(state): State<AppState>) -> Json<MapsConfigResponse> {
    Json(MapsConfigResponse {
        google_maps_api_key: state.config.google_maps_api_key.clone(),
        w3w_api_key: state.config.w3w_api_key.clone(),
    })
}
