//! Normalised turn-by-turn routes.

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::Bounds;

/// One manoeuvre in a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    /// Step length in metres.
    #[serde(rename = "distance")]
    pub distance_meters: f64,
    /// Step travel time in seconds.
    #[serde(rename = "duration")]
    pub duration_seconds: f64,
    /// Plain-text instruction, HTML already stripped.
    pub instruction: String,
    /// Manoeuvre kind, e.g. `turn-left`; `straight` when the vendor
    /// omits one.
    pub maneuver: String,
    /// Road or way name for the step.
    #[serde(rename = "name")]
    pub road_name: String,
}

/// A complete route between two coordinates, normalised across
/// vendors. Produced once per directions request and never mutated.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use pillion_core::Route;
///
/// let route = Route::from_geometry(
///     1200.0,
///     180.0,
///     vec![Coord { x: 77.2, y: 28.6 }, Coord { x: 77.3, y: 28.7 }],
///     Vec::new(),
/// );
/// let bounds = route.bounds.unwrap();
/// assert_eq!(bounds.sw, Coord { x: 77.2, y: 28.6 });
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Total length in metres.
    #[serde(rename = "distance")]
    pub distance_meters: f64,
    /// Total travel time in seconds.
    #[serde(rename = "duration")]
    pub duration_seconds: f64,
    /// Route line, serialised as a GeoJSON `LineString`.
    #[serde(with = "crate::geometry::linestring")]
    pub geometry: Vec<Coord<f64>>,
    /// Bounding box of the geometry; `None` for an empty line.
    pub bounds: Option<Bounds>,
    /// Ordered manoeuvres.
    pub steps: Vec<RouteStep>,
}

impl Route {
    /// Build a route, deriving the bounding box from the geometry.
    #[must_use]
    pub fn from_geometry(
        distance_meters: f64,
        duration_seconds: f64,
        geometry: Vec<Coord<f64>>,
        steps: Vec<RouteStep>,
    ) -> Self {
        let bounds = Bounds::from_coords(geometry.iter().copied());
        Self {
            distance_meters,
            duration_seconds,
            geometry,
            bounds,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_route() -> Route {
        Route::from_geometry(
            2500.0,
            420.0,
            vec![
                Coord { x: 77.2, y: 28.6 },
                Coord { x: 77.25, y: 28.58 },
                Coord { x: 77.3, y: 28.7 },
            ],
            vec![RouteStep {
                distance_meters: 2500.0,
                duration_seconds: 420.0,
                instruction: "Head north on Rajpath".to_owned(),
                maneuver: "straight".to_owned(),
                road_name: "Rajpath".to_owned(),
            }],
        )
    }

    #[rstest]
    fn derives_bounds_from_geometry() {
        let route = sample_route();
        let bounds = route.bounds.expect("non-empty geometry");
        assert_eq!(bounds.sw, Coord { x: 77.2, y: 28.58 });
        assert_eq!(bounds.ne, Coord { x: 77.3, y: 28.7 });
    }

    #[rstest]
    fn empty_geometry_has_no_bounds() {
        let route = Route::from_geometry(0.0, 0.0, Vec::new(), Vec::new());
        assert_eq!(route.bounds, None);
    }

    #[rstest]
    fn serialises_to_client_wire_shape() {
        let json = serde_json::to_value(sample_route()).expect("serialise");

        assert_eq!(json["distance"], 2500.0);
        assert_eq!(json["duration"], 420.0);
        assert_eq!(json["geometry"]["type"], "LineString");
        assert_eq!(json["geometry"]["coordinates"][0][0], 77.2);
        assert_eq!(json["bounds"][0], serde_json::json!([77.2, 28.58]));
        assert_eq!(json["steps"][0]["name"], "Rajpath");
        assert_eq!(json["steps"][0]["maneuver"], "straight");
    }

    #[rstest]
    fn round_trips_through_json() {
        let route = sample_route();
        let json = serde_json::to_string(&route).expect("serialise");
        let back: Route = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(back, route);
    }
}
