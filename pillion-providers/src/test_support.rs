//! Test-only stub providers with canned responses and call counters,
//! used by unit and behaviour tests of the orchestration layer.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use geo::Coord;

use pillion_core::{
    DirectionsProvider, PlaceSearch, ProviderError, Route, SearchResult, ThreeWordAddress,
    ThreeWordResolver,
};

/// `PlaceSearch` stub returning a pre-configured response.
#[derive(Debug)]
pub struct StubPlaceSearch {
    response: Result<Vec<SearchResult>, ProviderError>,
    calls: AtomicUsize,
}

impl StubPlaceSearch {
    /// Create a stub that answers every query with `results`.
    #[must_use]
    pub fn with_results(results: Vec<SearchResult>) -> Self {
        Self {
            response: Ok(results),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a stub that fails every query with `error`.
    #[must_use]
    pub fn failing(error: ProviderError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `search_places` was invoked.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlaceSearch for StubPlaceSearch {
    async fn search_places(&self, _query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

/// `DirectionsProvider` stub returning a pre-configured response.
#[derive(Debug)]
pub struct StubDirectionsProvider {
    response: Result<Option<Route>, ProviderError>,
    calls: AtomicUsize,
}

impl StubDirectionsProvider {
    /// Create a stub that answers every request with `route`.
    #[must_use]
    pub fn with_route(route: Option<Route>) -> Self {
        Self {
            response: Ok(route),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a stub that fails every request with `error`.
    #[must_use]
    pub fn failing(error: ProviderError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `get_route` was invoked.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DirectionsProvider for StubDirectionsProvider {
    async fn get_route(
        &self,
        _origin: Coord<f64>,
        _destination: Coord<f64>,
    ) -> Result<Option<Route>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

/// `ThreeWordResolver` stub with independent canned answers for the two
/// operations.
#[derive(Debug, Default)]
pub struct StubThreeWordResolver {
    suggestions: Vec<ThreeWordAddress>,
    conversion: Option<ThreeWordAddress>,
    suggest_calls: AtomicUsize,
    convert_calls: AtomicUsize,
}

impl StubThreeWordResolver {
    /// Create a stub that suggests `suggestions` for every query.
    #[must_use]
    pub fn with_suggestions(suggestions: Vec<ThreeWordAddress>) -> Self {
        Self {
            suggestions,
            ..Default::default()
        }
    }

    /// Create a stub that converts every input to `conversion`.
    #[must_use]
    pub fn with_conversion(conversion: Option<ThreeWordAddress>) -> Self {
        Self {
            conversion,
            ..Default::default()
        }
    }

    /// Number of times `suggest` was invoked.
    #[must_use]
    pub fn suggest_calls(&self) -> usize {
        self.suggest_calls.load(Ordering::SeqCst)
    }

    /// Number of times `convert` was invoked.
    #[must_use]
    pub fn convert_calls(&self) -> usize {
        self.convert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ThreeWordResolver for StubThreeWordResolver {
    async fn suggest(&self, _query: &str) -> Result<Vec<ThreeWordAddress>, ProviderError> {
        self.suggest_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.suggestions.clone())
    }

    async fn convert(&self, _words: &str) -> Result<Option<ThreeWordAddress>, ProviderError> {
        self.convert_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.conversion.clone())
    }
}
