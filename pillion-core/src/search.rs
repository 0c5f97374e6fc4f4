//! Normalised place search results.

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::ThreeWordAddress;

/// What kind of place a search result points at.
///
/// Serialised with the wire names the mobile client expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchResultKind {
    /// A street address or locality.
    #[serde(rename = "address")]
    Address,
    /// A named point of interest (establishment, attraction).
    #[serde(rename = "poi")]
    PointOfInterest,
    /// A three-word address resolved by the dedicated provider.
    #[serde(rename = "w3w")]
    ThreeWordAddress,
}

/// One entry in a search response, normalised across vendors.
///
/// Immutable once constructed; the client holds it in transient UI
/// state only.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use pillion_core::{SearchResult, SearchResultKind};
///
/// let result = SearchResult {
///     id: "poi-taj-mahal".to_owned(),
///     name: "Taj Mahal".to_owned(),
///     address: "Agra, Uttar Pradesh".to_owned(),
///     coordinates: Coord { x: 78.0421, y: 27.1751 },
///     kind: SearchResultKind::PointOfInterest,
/// };
/// let json = serde_json::to_value(&result).unwrap();
/// assert_eq!(json["coordinates"][0], 78.0421);
/// assert_eq!(json["type"], "poi");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Vendor-scoped identifier, stable within one response.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Human-readable address line.
    pub address: String,
    /// Position, `x = lon`, `y = lat`.
    #[serde(with = "crate::geometry::lonlat")]
    pub coordinates: Coord<f64>,
    /// Result classification.
    #[serde(rename = "type")]
    pub kind: SearchResultKind,
}

impl From<ThreeWordAddress> for SearchResult {
    /// Present a three-word address as a search result row.
    fn from(address: ThreeWordAddress) -> Self {
        Self {
            id: format!("w3w-{}", address.words),
            name: format!("///{}", address.words),
            address: address.nearest_place,
            coordinates: address.coordinates,
            kind: SearchResultKind::ThreeWordAddress,
        }
    }
}
