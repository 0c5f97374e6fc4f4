//! Vendor adapters for the Pillion location engine.
//!
//! One module per external mapping service: Google Maps (place search
//! and directions), Mapbox (the same, used as the fallback vendor) and
//! what3words (three-word-address search and conversion). Each adapter
//! translates between the normalised types in `pillion-core` and the
//! vendor's wire shapes, and degrades to static mock data when its API
//! key is absent, so a development deployment works without any
//! credentials.
//!
//! # Fallback contract
//!
//! - No API key configured: the adapter serves its mock table and
//!   returns `Ok`.
//! - Key configured but the live call fails: place and directions
//!   adapters return `Err` so the orchestration layer can try the next
//!   vendor; the what3words adapter falls straight back to its mock
//!   table because the demo keys for that vendor are quota-limited.

#![forbid(unsafe_code)]

use thiserror::Error;

pub mod google;
pub mod mapbox;
pub mod mock;
pub mod what3words;

#[doc(hidden)]
pub mod test_support;

mod util;

pub use google::{GoogleMaps, GoogleMapsConfig};
pub use mapbox::{Mapbox, MapboxConfig};
pub use what3words::{What3Words, What3WordsConfig};

/// Default user agent sent with vendor requests.
pub const DEFAULT_USER_AGENT: &str = "pillion-providers/0.1";

/// Errors raised while constructing an adapter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AdapterBuildError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    /// The configured base URL was not a valid absolute URL.
    #[error("invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}
