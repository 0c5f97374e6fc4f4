//! Shared router state: the configured provider adapters.
//!
//! Providers are injected as trait objects so the orchestration layers
//! (and their tests) never depend on a concrete vendor.

use std::sync::Arc;

use pillion_core::{DirectionsProvider, PlaceSearch, ThreeWordResolver};
use pillion_providers::{AdapterBuildError, GoogleMaps, Mapbox, What3Words};

use crate::config::ServerConfig;

/// Everything the handlers need, cloned per request by axum.
#[derive(Clone)]
pub struct AppState {
    /// Primary place-search vendor.
    pub primary_search: Arc<dyn PlaceSearch>,
    /// Fallback place-search vendor.
    pub secondary_search: Arc<dyn PlaceSearch>,
    /// Primary directions vendor.
    pub primary_directions: Arc<dyn DirectionsProvider>,
    /// Fallback directions vendor.
    pub secondary_directions: Arc<dyn DirectionsProvider>,
    /// Three-word-address resolver.
    pub three_words: Arc<dyn ThreeWordResolver>,
    /// Startup configuration, exposed through `/api/config/maps`.
    pub config: ServerConfig,
}

impl AppState {
    /// Build the production adapter set from the given configuration.
    ///
    /// Google is the primary vendor for both search and directions;
    /// Mapbox is the fallback for both.
    ///
    /// # Errors
    ///
    /// Returns an error if any adapter's HTTP client fails to build.
    pub fn from_config(config: ServerConfig) -> Result<Self, AdapterBuildError> {
        let google = Arc::new(GoogleMaps::new(config.google_maps_api_key.clone())?);
        let mapbox = Arc::new(Mapbox::new(config.mapbox_api_key.clone())?);
        let what3words = Arc::new(What3Words::new(config.w3w_api_key.clone())?);

        Ok(Self {
            primary_search: google.clone(),
            secondary_search: mapbox.clone(),
            primary_directions: google,
            secondary_directions: mapbox,
            three_words: what3words,
            config,
        })
    }
}
