//! Core domain types for the Pillion location engine.
//!
//! These models normalise the shapes returned by the mapping vendors so
//! that the aggregation and HTTP layers never handle raw vendor JSON.
//! Pure logic with bit-level precision requirements (the encoded
//! polyline codec, three-word-address query classification) also lives
//! here so it can be tested without any network access.

#![forbid(unsafe_code)]

pub mod geometry;
pub mod polyline;
pub mod words;

mod provider;
mod route;
mod search;
mod three_words;

pub use geometry::Bounds;
pub use provider::{
    DirectionsProvider, PlaceSearch, ProviderError, ThreeWordResolver, MAX_RESULTS,
    MIN_QUERY_LEN,
};
pub use route::{Route, RouteStep};
pub use search::{SearchResult, SearchResultKind};
pub use three_words::ThreeWordAddress;
