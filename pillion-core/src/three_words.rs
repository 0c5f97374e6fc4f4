//! Three-word address records.

use geo::Coord;
use serde::{Deserialize, Serialize};

/// A three-word address as returned by the what3words provider.
///
/// Treated as an opaque record: the system matches its shape and passes
/// it through, but never generates or validates the underlying word
/// grid. Serialised in the vendor's wire shape, which the client
/// consumes directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreeWordAddress {
    /// Three dot-separated words, without the `///` prefix.
    pub words: String,
    /// Centre of the grid square, `x = lon`, `y = lat`.
    #[serde(with = "crate::geometry::latlng")]
    pub coordinates: Coord<f64>,
    /// BCP 47-ish language code of the words.
    pub language: String,
    /// Shareable map link for the address.
    #[serde(rename = "map")]
    pub map_url: String,
    /// Nearest named place, for display under the words.
    #[serde(rename = "nearestPlace")]
    pub nearest_place: String,
}

impl ThreeWordAddress {
    /// Build an English-language record with the conventional map link.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use pillion_core::ThreeWordAddress;
    ///
    /// let address = ThreeWordAddress::new(
    ///     "hobby.thin.bump",
    ///     Coord { x: 80.248357, y: 13.084622 },
    ///     "Chennai, India",
    /// );
    /// assert_eq!(address.map_url, "https://w3w.co/hobby.thin.bump");
    /// ```
    #[must_use]
    pub fn new(
        words: impl Into<String>,
        coordinates: Coord<f64>,
        nearest_place: impl Into<String>,
    ) -> Self {
        let words = words.into();
        let map_url = format!("https://w3w.co/{words}");
        Self {
            words,
            coordinates,
            language: "en".to_owned(),
            map_url,
            nearest_place: nearest_place.into(),
        }
    }
}
