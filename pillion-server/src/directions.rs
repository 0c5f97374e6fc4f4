//! The directions resolver.
//!
//! Tries the primary vendor, then the fallback. Both failing (or
//! finding nothing) yields `None`, which the HTTP layer serializes as
//! a JSON `null` body; routing failure is a degraded answer, not an
//! error.

use geo::Coord;
use pillion_core::Route;

use crate::state::AppState;

/// Resolve a driving route, falling back across vendors.
pub async fn resolve_route(
    state: &AppState,
    origin: Coord<f64>,
    destination: Coord<f64>,
) -> Option<Route> {
    match state.primary_directions.get_route(origin, destination).await {
        Ok(Some(route)) => return Some(route),
        Ok(None) => tracing::debug!("primary directions vendor found no route"),
        Err(err) => tracing::warn!("primary directions vendor failed: {err}"),
    }

    match state
        .secondary_directions
        .get_route(origin, destination)
        .await
    {
        Ok(route) => route,
        Err(err) => {
            tracing::warn!("fallback directions vendor failed: {err}");
            None
        }
    }
}

/// Parse a `lon,lat` query-string coordinate.
///
/// Returns `None` for anything but two finite comma-separated numbers.
pub(crate) fn parse_lon_lat(value: &str) -> Option<Coord<f64>> {
    let (lon, lat) = value.split_once(',')?;
    let x: f64 = lon.trim().parse().ok()?;
    let y: f64 = lat.trim().parse().ok()?;
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(Coord { x, y })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pillion_core::ProviderError;
    use pillion_providers::test_support::{
        StubDirectionsProvider, StubPlaceSearch, StubThreeWordResolver,
    };
    use rstest::rstest;

    use super::*;
    use crate::config::ServerConfig;

    fn sample_route() -> Route {
        Route::from_geometry(
            2500.0,
            420.0,
            vec![Coord { x: 77.2, y: 28.6 }, Coord { x: 77.3, y: 28.7 }],
            Vec::new(),
        )
    }

    fn timeout_error() -> ProviderError {
        ProviderError::Timeout {
            url: "https://vendor.example/directions".to_owned(),
            timeout_secs: 30,
        }
    }

    fn state_with(
        primary: Arc<StubDirectionsProvider>,
        secondary: Arc<StubDirectionsProvider>,
    ) -> AppState {
        AppState {
            primary_search: Arc::new(StubPlaceSearch::with_results(vec![])),
            secondary_search: Arc::new(StubPlaceSearch::with_results(vec![])),
            primary_directions: primary,
            secondary_directions: secondary,
            three_words: Arc::new(StubThreeWordResolver::default()),
            config: ServerConfig::default(),
        }
    }

    fn endpoints() -> (Coord<f64>, Coord<f64>) {
        (Coord { x: 77.2, y: 28.6 }, Coord { x: 72.8, y: 18.9 })
    }

    #[tokio::test]
    async fn primary_route_wins_without_consulting_fallback() {
        let primary = Arc::new(StubDirectionsProvider::with_route(Some(sample_route())));
        let secondary = Arc::new(StubDirectionsProvider::with_route(None));
        let state = state_with(primary, secondary.clone());
        let (origin, destination) = endpoints();

        let route = resolve_route(&state, origin, destination).await;

        assert!(route.is_some());
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn primary_failure_falls_back() {
        let primary = Arc::new(StubDirectionsProvider::failing(timeout_error()));
        let secondary = Arc::new(StubDirectionsProvider::with_route(Some(sample_route())));
        let state = state_with(primary, secondary.clone());
        let (origin, destination) = endpoints();

        let route = resolve_route(&state, origin, destination).await;

        assert!(route.is_some());
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn primary_empty_result_also_falls_back() {
        let primary = Arc::new(StubDirectionsProvider::with_route(None));
        let secondary = Arc::new(StubDirectionsProvider::with_route(Some(sample_route())));
        let state = state_with(primary, secondary);
        let (origin, destination) = endpoints();

        assert!(resolve_route(&state, origin, destination).await.is_some());
    }

    #[tokio::test]
    async fn both_vendors_failing_yields_none() {
        let primary = Arc::new(StubDirectionsProvider::failing(timeout_error()));
        let secondary = Arc::new(StubDirectionsProvider::failing(timeout_error()));
        let state = state_with(primary, secondary);
        let (origin, destination) = endpoints();

        assert!(resolve_route(&state, origin, destination).await.is_none());
    }

    #[rstest]
    #[case("77.2,28.6", Some(Coord { x: 77.2, y: 28.6 }))]
    #[case(" 77.2 , 28.6 ", Some(Coord { x: 77.2, y: 28.6 }))]
    #[case("-0.1,51.5", Some(Coord { x: -0.1, y: 51.5 }))]
    #[case("77.2", None)]
    #[case("east,north", None)]
    #[case("77.2,28.6,0", None)]
    #[case("NaN,28.6", None)]
    #[case("inf,28.6", None)]
    #[case("", None)]
    fn lon_lat_parsing(#[case] input: &str, #[case] expected: Option<Coord<f64>>) {
        assert_eq!(parse_lon_lat(input), expected);
    }
}
