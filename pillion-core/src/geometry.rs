//! Coordinate serialisation helpers and bounding boxes.
//!
//! The wire format inherited by the mobile client uses three different
//! coordinate shapes: `[lon, lat]` arrays for search results, GeoJSON
//! `LineString` objects for route geometry, and `{ "lat": .., "lng": .. }`
//! objects for what3words records. The serde helper modules here keep
//! those shapes at the boundary while the rest of the system works with
//! [`geo::Coord`].

use geo::Coord;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A south-west / north-east bounding box around a route geometry.
///
/// Serialised as `[[sw_lon, sw_lat], [ne_lon, ne_lat]]`, the shape the
/// client hands straight to its map widget's `fitBounds`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// South-west corner.
    pub sw: Coord<f64>,
    /// North-east corner.
    pub ne: Coord<f64>,
}

impl Bounds {
    /// Compute the bounding box of a coordinate sequence.
    ///
    /// Returns `None` for an empty sequence.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use pillion_core::Bounds;
    ///
    /// let coords = [Coord { x: 77.0, y: 28.0 }, Coord { x: 78.0, y: 27.0 }];
    /// let bounds = Bounds::from_coords(coords.iter().copied()).unwrap();
    /// assert_eq!(bounds.sw, Coord { x: 77.0, y: 27.0 });
    /// assert_eq!(bounds.ne, Coord { x: 78.0, y: 28.0 });
    /// ```
    #[must_use]
    pub fn from_coords(coords: impl IntoIterator<Item = Coord<f64>>) -> Option<Self> {
        let mut iter = coords.into_iter();
        let first = iter.next()?;
        let mut bounds = Self { sw: first, ne: first };
        for coord in iter {
            bounds.sw.x = bounds.sw.x.min(coord.x);
            bounds.sw.y = bounds.sw.y.min(coord.y);
            bounds.ne.x = bounds.ne.x.max(coord.x);
            bounds.ne.y = bounds.ne.y.max(coord.y);
        }
        Some(bounds)
    }
}

impl Serialize for Bounds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [[self.sw.x, self.sw.y], [self.ne.x, self.ne.y]].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Bounds {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [[sw_x, sw_y], [ne_x, ne_y]] = <[[f64; 2]; 2]>::deserialize(deserializer)?;
        Ok(Self {
            sw: Coord { x: sw_x, y: sw_y },
            ne: Coord { x: ne_x, y: ne_y },
        })
    }
}

/// Serialise a [`Coord`] as a `[lon, lat]` JSON array.
pub mod lonlat {
    use super::{Coord, Deserialize, Deserializer, Serialize as _, Serializer};

    /// Serialise as `[lon, lat]`.
    pub fn serialize<S: Serializer>(coord: &Coord<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        [coord.x, coord.y].serialize(serializer)
    }

    /// Deserialise from `[lon, lat]`.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Coord<f64>, D::Error> {
        let [x, y] = <[f64; 2]>::deserialize(deserializer)?;
        Ok(Coord { x, y })
    }
}

/// Serialise a [`Coord`] as a `{ "lat": .., "lng": .. }` JSON object.
///
/// This is the shape the what3words API uses for coordinates.
pub mod latlng {
    use super::{Coord, Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct LatLng {
        lat: f64,
        lng: f64,
    }

    /// Serialise as `{ "lat": .., "lng": .. }`.
    pub fn serialize<S: Serializer>(coord: &Coord<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        LatLng {
            lat: coord.y,
            lng: coord.x,
        }
        .serialize(serializer)
    }

    /// Deserialise from `{ "lat": .., "lng": .. }`.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Coord<f64>, D::Error> {
        let latlng = LatLng::deserialize(deserializer)?;
        Ok(Coord {
            x: latlng.lng,
            y: latlng.lat,
        })
    }
}

/// Serialise a coordinate sequence as a GeoJSON `LineString` object.
pub mod linestring {
    use serde::de::Error as _;

    use super::{Coord, Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct LineString {
        #[serde(rename = "type")]
        kind: String,
        coordinates: Vec<[f64; 2]>,
    }

    /// Serialise as `{ "type": "LineString", "coordinates": [[lon, lat], ..] }`.
    pub fn serialize<S: Serializer>(
        coords: &[Coord<f64>],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        LineString {
            kind: "LineString".to_owned(),
            coordinates: coords.iter().map(|c| [c.x, c.y]).collect(),
        }
        .serialize(serializer)
    }

    /// Deserialise from a GeoJSON `LineString` object.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Coord<f64>>, D::Error> {
        let line = LineString::deserialize(deserializer)?;
        if line.kind != "LineString" {
            return Err(D::Error::custom(format!(
                "expected LineString geometry, got {}",
                line.kind
            )));
        }
        Ok(line
            .coordinates
            .into_iter()
            .map(|[x, y]| Coord { x, y })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn bounds_of_empty_sequence_is_none() {
        assert_eq!(Bounds::from_coords(std::iter::empty()), None);
    }

    #[rstest]
    fn bounds_of_single_point_is_degenerate() {
        let coord = Coord { x: 77.2, y: 28.6 };
        let bounds = Bounds::from_coords([coord]).expect("non-empty");
        assert_eq!(bounds.sw, coord);
        assert_eq!(bounds.ne, coord);
    }

    #[rstest]
    fn bounds_spans_all_points() {
        let coords = [
            Coord { x: 77.2, y: 28.6 },
            Coord { x: 72.8, y: 18.9 },
            Coord { x: 80.2, y: 13.0 },
        ];
        let bounds = Bounds::from_coords(coords).expect("non-empty");
        assert_eq!(bounds.sw, Coord { x: 72.8, y: 13.0 });
        assert_eq!(bounds.ne, Coord { x: 80.2, y: 28.6 });
    }

    #[rstest]
    fn bounds_round_trips_through_json() {
        let bounds = Bounds {
            sw: Coord { x: 72.8, y: 13.0 },
            ne: Coord { x: 80.2, y: 28.6 },
        };
        let json = serde_json::to_string(&bounds).expect("serialise");
        assert_eq!(json, "[[72.8,13.0],[80.2,28.6]]");
        let back: Bounds = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(back, bounds);
    }
}
