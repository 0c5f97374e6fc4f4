//! Google Maps adapter: place search and directions.
//!
//! The primary vendor for both free-text search and routing. Place
//! search is a two-stage call: Places Autocomplete for predictions,
//! then a concurrent fan-out of Place Details lookups to resolve
//! coordinates for each prediction. Directions return an encoded
//! overview polyline which is decoded with the core codec.
//!
//! Without an API key the adapter serves the static mock table; with a
//! key, live-call failures surface as [`ProviderError`] so the caller
//! can fall back to the secondary vendor.

mod api;

use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::join_all;
use geo::Coord;
use reqwest::Client;
use serde::de::DeserializeOwned;

use pillion_core::{
    DirectionsProvider, PlaceSearch, ProviderError, Route, RouteStep, SearchResult,
    SearchResultKind, polyline,
};

use crate::util::{below_min_length, convert_reqwest_error};
use crate::{mock, AdapterBuildError, DEFAULT_USER_AGENT};

/// Default API base URL.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Place type tags that classify a details result as a POI.
const POI_TYPES: &[&str] = &["establishment", "point_of_interest", "tourist_attraction"];

/// Configuration for [`GoogleMaps`].
#[derive(Debug, Clone)]
pub struct GoogleMapsConfig {
    /// API key; `None` degrades the adapter to mock data.
    pub api_key: Option<String>,
    /// Base URL for the Maps APIs.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for GoogleMapsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl GoogleMapsConfig {
    /// Create a configuration with the given (optional) API key.
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

/// Google Maps place-search and directions adapter.
#[derive(Debug)]
pub struct GoogleMaps {
    client: Client,
    config: GoogleMapsConfig,
}

impl GoogleMaps {
    /// Create an adapter with default configuration and the given key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(api_key: Option<String>) -> Result<Self, AdapterBuildError> {
        Self::with_config(GoogleMapsConfig::new(api_key))
    }

    /// Create an adapter with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_config(config: GoogleMapsConfig) -> Result<Self, AdapterBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let timeout_secs = self.config.timeout.as_secs();
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|err| convert_reqwest_error(&err, url, timeout_secs))?
            .error_for_status()
            .map_err(|err| convert_reqwest_error(&err, url, timeout_secs))?;

        response.json().await.map_err(|err| ProviderError::Parse {
            message: err.to_string(),
        })
    }

    async fn search_live(&self, query: &str, key: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let url = self.endpoint("place/autocomplete/json");
        let response: api::AutocompleteResponse = self
            .get_json(
                &url,
                &[
                    ("input", query),
                    ("key", key),
                    ("components", "country:in"),
                    ("language", "en"),
                ],
            )
            .await?;

        if !api::status_is_ok(&response.status) {
            return Err(ProviderError::Service {
                code: response.status,
                message: response.error_message.unwrap_or_default(),
            });
        }

        // Resolve coordinates for each prediction concurrently; a
        // failed details lookup drops that prediction rather than the
        // whole response.
        let lookups = response
            .predictions
            .into_iter()
            .take(pillion_core::MAX_RESULTS)
            .map(|prediction| self.fetch_details(prediction, key));
        let results = join_all(lookups).await;
        Ok(results.into_iter().flatten().collect())
    }

    async fn fetch_details(&self, prediction: api::Prediction, key: &str) -> Option<SearchResult> {
        let url = self.endpoint("place/details/json");
        let response: Result<api::DetailsResponse, ProviderError> = self
            .get_json(
                &url,
                &[
                    ("place_id", prediction.place_id.as_str()),
                    ("fields", "geometry,name,formatted_address,types"),
                    ("key", key),
                ],
            )
            .await;

        let details = match response {
            Ok(body) if body.status == "OK" => body.result?,
            Ok(body) => {
                log::warn!(
                    "place details for {} returned status {}",
                    prediction.place_id,
                    body.status
                );
                return None;
            }
            Err(err) => {
                log::warn!("place details for {} failed: {err}", prediction.place_id);
                return None;
            }
        };

        let location = details.geometry.as_ref()?.location.coord();
        let name = prediction
            .structured_formatting
            .map(|formatting| formatting.main_text)
            .or(details.name)
            .unwrap_or_default();

        Some(SearchResult {
            id: prediction.place_id,
            name,
            address: details.formatted_address.unwrap_or_default(),
            coordinates: location,
            kind: classify(&details.types),
        })
    }

    async fn route_live(
        &self,
        origin: Coord<f64>,
        destination: Coord<f64>,
        key: &str,
    ) -> Result<Option<Route>, ProviderError> {
        let url = self.endpoint("directions/json");
        // Google expects lat,lng order.
        let origin_param = format!("{},{}", origin.y, origin.x);
        let destination_param = format!("{},{}", destination.y, destination.x);
        let response: api::DirectionsResponse = self
            .get_json(
                &url,
                &[
                    ("origin", origin_param.as_str()),
                    ("destination", destination_param.as_str()),
                    ("mode", "driving"),
                    ("alternatives", "false"),
                    ("language", "en"),
                    ("key", key),
                ],
            )
            .await?;

        if !api::status_is_ok(&response.status) {
            return Err(ProviderError::Service {
                code: response.status,
                message: response.error_message.unwrap_or_default(),
            });
        }

        let Some(route) = response.routes.into_iter().next() else {
            return Ok(None);
        };
        convert_route(route).map(Some)
    }
}

/// Convert a directions route into the normalised [`Route`].
fn convert_route(route: api::DirectionsRoute) -> Result<Route, ProviderError> {
    let leg = route
        .legs
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::Parse {
            message: "directions route missing legs".to_owned(),
        })?;

    let geometry =
        polyline::decode(&route.overview_polyline.points).map_err(|err| ProviderError::Parse {
            message: format!("invalid overview polyline: {err}"),
        })?;

    let steps = leg
        .steps
        .into_iter()
        .map(|step| {
            let instruction = strip_html(&step.html_instructions);
            RouteStep {
                distance_meters: step.distance.value,
                duration_seconds: step.duration.value,
                road_name: instruction.clone(),
                instruction,
                maneuver: step.maneuver.unwrap_or_else(|| "straight".to_owned()),
            }
        })
        .collect();

    Ok(Route::from_geometry(
        leg.distance.value,
        leg.duration.value,
        geometry,
        steps,
    ))
}

/// Classify a details result from its type tags.
fn classify(types: &[String]) -> SearchResultKind {
    if types.iter().any(|t| POI_TYPES.contains(&t.as_str())) {
        SearchResultKind::PointOfInterest
    } else {
        SearchResultKind::Address
    }
}

/// Remove HTML tags from an instruction string.
fn strip_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

impl api::LatLng {
    fn coord(&self) -> Coord<f64> {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }
}

#[async_trait]
impl PlaceSearch for GoogleMaps {
    async fn search_places(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        if below_min_length(query) {
            return Ok(Vec::new());
        }

        let Some(key) = self.config.api_key.clone() else {
            log::warn!("GOOGLE_MAPS_API_KEY not configured; serving mock places for {query:?}");
            return Ok(mock::search_places(query));
        };
        self.search_live(query, &key).await
    }
}

#[async_trait]
impl DirectionsProvider for GoogleMaps {
    async fn get_route(
        &self,
        origin: Coord<f64>,
        destination: Coord<f64>,
    ) -> Result<Option<Route>, ProviderError> {
        let Some(key) = self.config.api_key.clone() else {
            log::warn!("GOOGLE_MAPS_API_KEY not configured; no directions available");
            return Ok(None);
        };
        self.route_live(origin, destination, &key).await
    }
}
