//! The search aggregator.
//!
//! Merges three sources behind one query box: three-word-address
//! suggestions, the primary place vendor, and the fallback place
//! vendor. Precedence is fixed: a query that looks like a three-word
//! address is answered by the resolver alone whenever it has anything
//! to say; place vendors are only consulted otherwise. Adapter errors
//! are logged and swallowed so the endpoint degrades instead of
//! failing.

use pillion_core::{words, SearchResult, MAX_RESULTS, MIN_QUERY_LEN};

use crate::state::AppState;

/// Run the aggregated search for one query.
///
/// Queries under the minimum length return an empty list without any
/// provider call. Results are capped at [`MAX_RESULTS`], provider
/// order preserved, place results before appended three-word records.
pub async fn aggregate_search(state: &AppState, query: &str) -> Vec<SearchResult> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let three_wordish = words::looks_like_three_words(trimmed);
    let mut suggestions: Vec<SearchResult> = Vec::new();
    if three_wordish {
        match state.three_words.suggest(trimmed).await {
            Ok(found) => suggestions = found.into_iter().map(SearchResult::from).collect(),
            Err(err) => tracing::warn!("three-word suggestion failed for {trimmed:?}: {err}"),
        }
        if !suggestions.is_empty() {
            suggestions.truncate(MAX_RESULTS);
            return suggestions;
        }
    }

    let mut results = match state.primary_search.search_places(trimmed).await {
        Ok(results) => results,
        Err(err) => {
            tracing::warn!("primary place search failed for {trimmed:?}: {err}");
            match state.secondary_search.search_places(trimmed).await {
                Ok(results) => results,
                Err(err) => {
                    tracing::warn!("fallback place search failed for {trimmed:?}: {err}");
                    Vec::new()
                }
            }
        }
    };

    if three_wordish && results.len() < MAX_RESULTS {
        results.append(&mut suggestions);
    }
    results.truncate(MAX_RESULTS);
    results
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use geo::Coord;
    use pillion_core::{SearchResultKind, ThreeWordAddress};
    use pillion_providers::test_support::{
        StubDirectionsProvider, StubPlaceSearch, StubThreeWordResolver,
    };

    use super::*;
    use crate::config::ServerConfig;

    fn place(id: usize) -> SearchResult {
        SearchResult {
            id: format!("place-{id}"),
            name: format!("Place {id}"),
            address: "Agra, India".to_owned(),
            coordinates: Coord { x: 78.0, y: 27.0 },
            kind: SearchResultKind::Address,
        }
    }

    fn suggestion() -> ThreeWordAddress {
        ThreeWordAddress::new(
            "chilly.bunches.grumble",
            Coord {
                x: 77.220_724,
                y: 28.637_248,
            },
            "New Delhi, India",
        )
    }

    fn network_error() -> pillion_core::ProviderError {
        pillion_core::ProviderError::Network {
            url: "https://vendor.example/search".to_owned(),
            message: "connection refused".to_owned(),
        }
    }

    fn state_with(
        primary: Arc<StubPlaceSearch>,
        secondary: Arc<StubPlaceSearch>,
        resolver: Arc<StubThreeWordResolver>,
    ) -> AppState {
        AppState {
            primary_search: primary,
            secondary_search: secondary,
            primary_directions: Arc::new(StubDirectionsProvider::with_route(None)),
            secondary_directions: Arc::new(StubDirectionsProvider::with_route(None)),
            three_words: resolver,
            config: ServerConfig::default(),
        }
    }

    #[tokio::test]
    async fn three_word_queries_skip_place_search() {
        let primary = Arc::new(StubPlaceSearch::with_results(vec![place(1)]));
        let secondary = Arc::new(StubPlaceSearch::with_results(vec![place(2)]));
        let resolver = Arc::new(StubThreeWordResolver::with_suggestions(vec![suggestion()]));
        let state = state_with(primary.clone(), secondary.clone(), resolver);

        let results = aggregate_search(&state, "chilly.bunches.grumble").await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, SearchResultKind::ThreeWordAddress);
        assert_eq!(results[0].name, "///chilly.bunches.grumble");
        assert_eq!(primary.calls(), 0);
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn plain_queries_never_touch_the_resolver() {
        let primary = Arc::new(StubPlaceSearch::with_results(vec![place(1)]));
        let secondary = Arc::new(StubPlaceSearch::with_results(vec![]));
        let resolver = Arc::new(StubThreeWordResolver::with_suggestions(vec![suggestion()]));
        let state = state_with(primary, secondary, resolver.clone());

        let results = aggregate_search(&state, "taj mahal").await;

        assert_eq!(results.len(), 1);
        assert_eq!(resolver.suggest_calls(), 0);
    }

    #[tokio::test]
    async fn short_queries_make_no_provider_calls() {
        let primary = Arc::new(StubPlaceSearch::with_results(vec![place(1)]));
        let secondary = Arc::new(StubPlaceSearch::with_results(vec![place(2)]));
        let resolver = Arc::new(StubThreeWordResolver::default());
        let state = state_with(primary.clone(), secondary.clone(), resolver.clone());

        assert!(aggregate_search(&state, "t").await.is_empty());
        assert!(aggregate_search(&state, "  ").await.is_empty());
        assert_eq!(primary.calls(), 0);
        assert_eq!(secondary.calls(), 0);
        assert_eq!(resolver.suggest_calls(), 0);
    }

    #[tokio::test]
    async fn primary_failure_falls_back_to_secondary() {
        let primary = Arc::new(StubPlaceSearch::failing(network_error()));
        let secondary = Arc::new(StubPlaceSearch::with_results(vec![place(2)]));
        let resolver = Arc::new(StubThreeWordResolver::default());
        let state = state_with(primary, secondary.clone(), resolver);

        let results = aggregate_search(&state, "india gate").await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "place-2");
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn both_vendors_failing_degrades_to_empty() {
        let primary = Arc::new(StubPlaceSearch::failing(network_error()));
        let secondary = Arc::new(StubPlaceSearch::failing(network_error()));
        let resolver = Arc::new(StubThreeWordResolver::default());
        let state = state_with(primary, secondary, resolver);

        assert!(aggregate_search(&state, "india gate").await.is_empty());
    }

    #[tokio::test]
    async fn results_are_capped() {
        let primary = Arc::new(StubPlaceSearch::with_results(
            (0..8).map(place).collect(),
        ));
        let secondary = Arc::new(StubPlaceSearch::with_results(vec![]));
        let resolver = Arc::new(StubThreeWordResolver::default());
        let state = state_with(primary, secondary, resolver);

        let results = aggregate_search(&state, "mg road").await;

        assert_eq!(results.len(), MAX_RESULTS);
        assert_eq!(results[0].id, "place-0");
    }

    #[tokio::test]
    async fn empty_suggestions_fall_through_to_place_search() {
        let primary = Arc::new(StubPlaceSearch::with_results(vec![place(1)]));
        let secondary = Arc::new(StubPlaceSearch::with_results(vec![]));
        let resolver = Arc::new(StubThreeWordResolver::with_suggestions(vec![]));
        let state = state_with(primary.clone(), secondary, resolver);

        let results = aggregate_search(&state, "chilly.bun").await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "place-1");
        assert_eq!(primary.calls(), 1);
    }
}
