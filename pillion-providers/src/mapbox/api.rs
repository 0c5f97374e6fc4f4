//! Mapbox API response types.
//!
//! Deserialisation types for the Geocoding v5 and Directions v5
//! endpoints, trimmed to the fields the adapter consumes.
//!
//! See: <https://docs.mapbox.com/api/search/geocoding-v5/>

use geo::Coord;
use serde::Deserialize;

/// Geocoding response (a GeoJSON feature collection).
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    /// Matched features, best first.
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One geocoding feature.
#[derive(Debug, Deserialize)]
pub struct Feature {
    /// Feature identifier, e.g. `poi.123`.
    pub id: String,
    /// Primary name of the feature.
    pub text: String,
    /// Full place name including context, e.g. `"Taj Mahal, Agra, India"`.
    pub place_name: String,
    /// Feature centre as `[lon, lat]`.
    pub center: [f64; 2],
    /// POI properties; `category` present only for POIs.
    #[serde(default)]
    pub properties: FeatureProperties,
}

/// Properties attached to a geocoding feature.
#[derive(Debug, Default, Deserialize)]
pub struct FeatureProperties {
    /// POI category, absent for plain addresses.
    pub category: Option<String>,
}

impl Feature {
    /// Feature centre as a coordinate.
    #[must_use]
    pub fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.center[0],
            y: self.center[1],
        }
    }
}

/// Directions response.
#[derive(Debug, Deserialize)]
pub struct DirectionsResponse {
    /// Status code; `"Ok"` on success.
    pub code: String,
    /// Optional message accompanying a non-`Ok` code.
    pub message: Option<String>,
    /// Routes, best first.
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

impl DirectionsResponse {
    /// Check whether the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }
}

/// One route alternative.
#[derive(Debug, Deserialize)]
pub struct DirectionsRoute {
    /// Total length in metres.
    pub distance: f64,
    /// Total travel time in seconds.
    pub duration: f64,
    /// Route geometry (GeoJSON, because the adapter requests
    /// `geometries=geojson`).
    #[serde(with = "pillion_core::geometry::linestring")]
    pub geometry: Vec<Coord<f64>>,
    /// Route legs; one for a two-point request.
    #[serde(default)]
    pub legs: Vec<Leg>,
}

/// One leg of a route.
#[derive(Debug, Deserialize)]
pub struct Leg {
    /// Turn-by-turn steps.
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One step of a leg.
#[derive(Debug, Deserialize)]
pub struct Step {
    /// Step length in metres.
    pub distance: f64,
    /// Step travel time in seconds.
    pub duration: f64,
    /// Road or way name.
    #[serde(default)]
    pub name: String,
    /// The manoeuvre starting this step.
    pub maneuver: Maneuver,
}

/// A step manoeuvre.
#[derive(Debug, Deserialize)]
pub struct Maneuver {
    /// Spoken instruction text.
    pub instruction: String,
    /// Manoeuvre kind, e.g. `turn`.
    #[serde(rename = "type")]
    pub kind: String,
}
