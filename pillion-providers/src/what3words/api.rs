//! what3words API response types.
//!
//! The convert-to-coordinates endpoint returns the wire shape of
//! [`pillion_core::ThreeWordAddress`] directly, so only the autosuggest
//! envelope needs its own types. Autosuggest suggestions carry no
//! coordinates; the adapter resolves each suggestion with a follow-up
//! convert call.
//!
//! See: <https://developer.what3words.com/public-api/docs>

use serde::Deserialize;

/// Autosuggest response envelope.
#[derive(Debug, Deserialize)]
pub struct AutosuggestResponse {
    /// Suggestions, best first.
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

/// One autosuggest suggestion.
#[derive(Debug, Deserialize)]
pub struct Suggestion {
    /// The suggested three-word address.
    pub words: String,
    /// Nearest named place.
    #[serde(rename = "nearestPlace")]
    pub nearest_place: String,
}
