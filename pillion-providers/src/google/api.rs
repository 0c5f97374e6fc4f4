//! Google Maps API response types.
//!
//! Deserialisation types for the subset of the Places Autocomplete,
//! Place Details and Directions APIs this crate consumes. Vendor JSON
//! never crosses the adapter boundary: everything is parsed into these
//! structs and converted to `pillion-core` types.
//!
//! See: <https://developers.google.com/maps/documentation/places/web-service>

use serde::Deserialize;

/// Statuses shared by the Places and Directions endpoints.
///
/// `OK` and `ZERO_RESULTS` are the two non-error outcomes; anything
/// else (`REQUEST_DENIED`, `OVER_QUERY_LIMIT`, ...) is a service error.
pub fn status_is_ok(status: &str) -> bool {
    status == "OK" || status == "ZERO_RESULTS"
}

/// Places Autocomplete response.
#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    /// Vendor status code.
    pub status: String,
    /// Optional error detail when `status` is not `OK`.
    pub error_message: Option<String>,
    /// Predictions, best first.
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

/// One autocomplete prediction.
#[derive(Debug, Deserialize)]
pub struct Prediction {
    /// Opaque place identifier, used for the details lookup.
    pub place_id: String,
    /// Pre-split display text.
    pub structured_formatting: Option<StructuredFormatting>,
}

/// Autocomplete display text split into main and secondary parts.
#[derive(Debug, Deserialize)]
pub struct StructuredFormatting {
    /// Primary display line, usually the place name.
    pub main_text: String,
}

/// Place Details response.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    /// Vendor status code.
    pub status: String,
    /// The place, present when `status` is `OK`.
    pub result: Option<PlaceDetails>,
}

/// The fields requested from Place Details.
#[derive(Debug, Deserialize)]
pub struct PlaceDetails {
    /// Place name.
    pub name: Option<String>,
    /// Formatted address line.
    pub formatted_address: Option<String>,
    /// Location geometry.
    pub geometry: Option<Geometry>,
    /// Place type tags, used to classify POIs.
    #[serde(default)]
    pub types: Vec<String>,
}

/// Geometry wrapper around a location.
#[derive(Debug, Deserialize)]
pub struct Geometry {
    /// The place's position.
    pub location: LatLng,
}

/// A latitude/longitude pair in Google's field order.
#[derive(Debug, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// Directions response.
#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    /// Vendor status code.
    pub status: String,
    /// Optional error detail when `status` is not `OK`.
    pub error_message: Option<String>,
    /// Routes, best first; empty on `ZERO_RESULTS`.
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

/// One route alternative.
#[derive(Debug, Deserialize)]
pub struct DirectionsRoute {
    /// Whole-route geometry as an encoded polyline.
    pub overview_polyline: OverviewPolyline,
    /// Route legs; a single-leg route for our two-point requests.
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// Encoded polyline wrapper.
#[derive(Debug, Deserialize)]
pub struct OverviewPolyline {
    /// The encoded point string.
    pub points: String,
}

/// One leg of a route.
#[derive(Debug, Deserialize)]
pub struct Leg {
    /// Leg length.
    pub distance: TextValue,
    /// Leg travel time.
    pub duration: TextValue,
    /// Turn-by-turn steps.
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Google's `{ "text": .., "value": .. }` quantity wrapper.
#[derive(Debug, Deserialize)]
pub struct TextValue {
    /// The numeric value (metres or seconds).
    pub value: f64,
}

/// One step of a leg.
#[derive(Debug, Deserialize)]
pub struct Step {
    /// Step length.
    pub distance: TextValue,
    /// Step travel time.
    pub duration: TextValue,
    /// Instruction text with embedded HTML markup.
    pub html_instructions: String,
    /// Manoeuvre kind; absent for plain "continue" steps.
    pub maneuver: Option<String>,
}
