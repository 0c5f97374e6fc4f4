//! Mapbox adapter: place search and directions.
//!
//! The secondary vendor, used when the Google adapter fails. Forward
//! geocoding restricted to the app's fixed country filter, and the
//! Directions v5 driving profile with GeoJSON geometry.

mod api;

use std::time::Duration;

use async_trait::async_trait;
use geo::Coord;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use pillion_core::{
    DirectionsProvider, PlaceSearch, ProviderError, Route, RouteStep, SearchResult,
    SearchResultKind, MAX_RESULTS,
};

use crate::util::{below_min_length, convert_reqwest_error};
use crate::{mock, AdapterBuildError, DEFAULT_USER_AGENT};

/// Default API base URL.
const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`Mapbox`].
#[derive(Debug, Clone)]
pub struct MapboxConfig {
    /// Access token; `None` degrades the adapter to mock data.
    pub api_key: Option<String>,
    /// Base URL for the Mapbox APIs.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for MapboxConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl MapboxConfig {
    /// Create a configuration with the given (optional) access token.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            ..Default::default()
        }
    }

    /// Override the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Mapbox place-search and directions adapter.
#[derive(Debug)]
pub struct Mapbox {
    client: Client,
    base_url: Url,
    config: MapboxConfig,
}

impl Mapbox {
    /// Create an adapter with default configuration and the given token.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(api_key: Option<String>) -> Result<Self, AdapterBuildError> {
        Self::with_config(MapboxConfig::new(api_key))
    }

    /// Create an adapter with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build or the base
    /// URL does not parse.
    pub fn with_config(config: MapboxConfig) -> Result<Self, AdapterBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()?;
        let base_url = Url::parse(&config.base_url)?;
        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    /// Build an endpoint URL from path segments, percent-encoding each
    /// segment (geocoding queries are embedded in the path).
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ProviderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ProviderError::Parse {
                message: format!("base URL {} cannot carry a path", self.base_url),
            })?
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        params: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let timeout_secs = self.config.timeout.as_secs();
        let display = url.to_string();
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|err| convert_reqwest_error(&err, &display, timeout_secs))?
            .error_for_status()
            .map_err(|err| convert_reqwest_error(&err, &display, timeout_secs))?;

        response.json().await.map_err(|err| ProviderError::Parse {
            message: err.to_string(),
        })
    }

    async fn search_live(
        &self,
        query: &str,
        token: &str,
    ) -> Result<Vec<SearchResult>, ProviderError> {
        let url = self.endpoint(&[
            "geocoding",
            "v5",
            "mapbox.places",
            &format!("{query}.json"),
        ])?;
        let response: api::GeocodingResponse = self
            .get_json(
                url,
                &[
                    ("access_token", token),
                    ("country", "in"),
                    ("limit", "5"),
                    ("types", "place,address,poi"),
                    ("language", "en"),
                ],
            )
            .await?;

        Ok(response
            .features
            .into_iter()
            .take(MAX_RESULTS)
            .map(convert_feature)
            .collect())
    }

    async fn route_live(
        &self,
        origin: Coord<f64>,
        destination: Coord<f64>,
        token: &str,
    ) -> Result<Option<Route>, ProviderError> {
        let pair = format!(
            "{},{};{},{}",
            origin.x, origin.y, destination.x, destination.y
        );
        let url = self.endpoint(&["directions", "v5", "mapbox", "driving", &pair])?;
        let response: api::DirectionsResponse = self
            .get_json(
                url,
                &[
                    ("access_token", token),
                    ("geometries", "geojson"),
                    ("overview", "full"),
                    ("steps", "true"),
                    ("language", "en"),
                ],
            )
            .await?;

        if !response.is_ok() {
            // "NoRoute" and "NoSegment" mean the request was fine but
            // nothing is reachable; treat those as an absent route.
            if matches!(response.code.as_str(), "NoRoute" | "NoSegment") {
                return Ok(None);
            }
            return Err(ProviderError::Service {
                code: response.code,
                message: response.message.unwrap_or_default(),
            });
        }

        Ok(response.routes.into_iter().next().map(convert_route))
    }
}

/// Convert a geocoding feature into a normalised [`SearchResult`].
fn convert_feature(feature: api::Feature) -> SearchResult {
    let kind = if feature.properties.category.is_some() {
        SearchResultKind::PointOfInterest
    } else {
        SearchResultKind::Address
    };
    // place_name repeats the feature name; keep only the context part.
    let address = feature
        .place_name
        .strip_prefix(&format!("{}, ", feature.text))
        .unwrap_or(&feature.place_name)
        .to_owned();

    SearchResult {
        id: feature.id.clone(),
        name: feature.text.clone(),
        address,
        coordinates: feature.coord(),
        kind,
    }
}

/// Convert a directions route into the normalised [`Route`].
fn convert_route(route: api::DirectionsRoute) -> Route {
    let steps = route
        .legs
        .into_iter()
        .flat_map(|leg| leg.steps)
        .map(|step| RouteStep {
            distance_meters: step.distance,
            duration_seconds: step.duration,
            instruction: step.maneuver.instruction,
            maneuver: step.maneuver.kind,
            road_name: step.name,
        })
        .collect();

    Route::from_geometry(route.distance, route.duration, route.geometry, steps)
}

#[async_trait]
impl PlaceSearch for Mapbox {
    async fn search_places(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        if below_min_length(query) {
            return Ok(Vec::new());
        }

        let Some(token) = self.config.api_key.clone() else {
            log::warn!("MAPBOX_API_KEY not configured; serving mock places for {query:?}");
            return Ok(mock::search_places(query));
        };
        self.search_live(query, &token).await
    }
}

#[async_trait]
impl DirectionsProvider for Mapbox {
    async fn get_route(
        &self,
        origin: Coord<f64>,
        destination: Coord<f64>,
    ) -> Result<Option<Route>, ProviderError> {
        let Some(token) = self.config.api_key.clone() else {
            log::warn!("MAPBOX_API_KEY not configured; no directions available");
            return Ok(None);
        };
        self.route_live(origin, destination, &token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn keyless() -> Mapbox {
        Mapbox::new(None).expect("adapter should build")
    }

    #[rstest]
    fn endpoint_encodes_query_segments() {
        let adapter = keyless();
        let url = adapter
            .endpoint(&["geocoding", "v5", "mapbox.places", "Taj Mahal.json"])
            .expect("valid base");

        assert_eq!(
            url.as_str(),
            "https://api.mapbox.com/geocoding/v5/mapbox.places/Taj%20Mahal.json"
        );
    }

    #[rstest]
    fn endpoint_keeps_coordinate_pair_literal() {
        let adapter = keyless();
        let url = adapter
            .endpoint(&["directions", "v5", "mapbox", "driving", "77.2,28.6;77.3,28.7"])
            .expect("valid base");

        assert_eq!(
            url.as_str(),
            "https://api.mapbox.com/directions/v5/mapbox/driving/77.2,28.6;77.3,28.7"
        );
    }

    #[rstest]
    fn feature_with_category_is_a_poi() {
        let feature = api::Feature {
            id: "poi.1".to_owned(),
            text: "Taj Mahal".to_owned(),
            place_name: "Taj Mahal, Agra, Uttar Pradesh, India".to_owned(),
            center: [78.0421, 27.1751],
            properties: api::FeatureProperties {
                category: Some("monument".to_owned()),
            },
        };

        let result = convert_feature(feature);

        assert_eq!(result.kind, SearchResultKind::PointOfInterest);
        assert_eq!(result.address, "Agra, Uttar Pradesh, India");
        assert_eq!(result.coordinates, Coord { x: 78.0421, y: 27.1751 });
    }

    #[rstest]
    fn feature_without_category_is_an_address() {
        let feature = api::Feature {
            id: "address.2".to_owned(),
            text: "MG Road".to_owned(),
            place_name: "MG Road, Bengaluru, India".to_owned(),
            center: [77.6081, 12.9757],
            properties: api::FeatureProperties::default(),
        };

        assert_eq!(convert_feature(feature).kind, SearchResultKind::Address);
    }

    #[rstest]
    fn route_conversion_flattens_legs_and_derives_bounds() {
        let route = api::DirectionsRoute {
            distance: 2500.0,
            duration: 420.0,
            geometry: vec![Coord { x: 77.2, y: 28.6 }, Coord { x: 77.3, y: 28.7 }],
            legs: vec![api::Leg {
                steps: vec![api::Step {
                    distance: 2500.0,
                    duration: 420.0,
                    name: "Rajpath".to_owned(),
                    maneuver: api::Maneuver {
                        instruction: "Head north on Rajpath".to_owned(),
                        kind: "depart".to_owned(),
                    },
                }],
            }],
        };

        let converted = convert_route(route);

        assert_eq!(converted.steps.len(), 1);
        assert_eq!(converted.steps[0].road_name, "Rajpath");
        let bounds = converted.bounds.expect("non-empty geometry");
        assert_eq!(bounds.ne, Coord { x: 77.3, y: 28.7 });
    }

    #[tokio::test]
    async fn keyless_search_serves_the_mock_table() {
        let results = keyless()
            .search_places("india gate")
            .await
            .expect("mock fallback never fails");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "India Gate");
    }

    #[tokio::test]
    async fn keyless_directions_return_none() {
        let route = keyless()
            .get_route(Coord { x: 77.2, y: 28.6 }, Coord { x: 72.8, y: 18.9 })
            .await
            .expect("keyless never fails");
        assert!(route.is_none());
    }
}
