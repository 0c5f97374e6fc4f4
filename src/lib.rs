//! Facade crate for the Pillion location engine.
//!
//! This crate re-exports the core domain types and exposes the vendor
//! provider adapters behind a feature flag.

#![forbid(unsafe_code)]

pub use pillion_core::{
    Bounds, DirectionsProvider, PlaceSearch, ProviderError, Route, RouteStep, SearchResult,
    SearchResultKind, ThreeWordAddress, ThreeWordResolver, MAX_RESULTS, MIN_QUERY_LEN,
};

#[cfg(feature = "providers")]
pub use pillion_providers::{
    AdapterBuildError, GoogleMaps, GoogleMapsConfig, Mapbox, MapboxConfig, What3Words,
    What3WordsConfig,
};
