//! what3words adapter: three-word-address search and conversion.
//!
//! Implements [`ThreeWordResolver`] against the autosuggest and
//! convert-to-coordinates endpoints, clipped to the app's fixed
//! country. Unlike the place adapters this one never surfaces an error:
//! the vendor's free keys are quota-limited enough that the mock table
//! is the authoritative demo data, so every failure path falls back to
//! it and the caller always gets a well-formed answer.

mod api;
mod mock;

use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::join_all;
use reqwest::Client;

use pillion_core::{words, ProviderError, ThreeWordAddress, ThreeWordResolver, MIN_QUERY_LEN};

use crate::util::convert_reqwest_error;
use crate::{AdapterBuildError, DEFAULT_USER_AGENT};

/// Default API base URL.
const DEFAULT_BASE_URL: &str = "https://api.what3words.com/v3";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum suggestions resolved per query.
const SUGGESTION_LIMIT: usize = 3;

/// Configuration for [`What3Words`].
#[derive(Debug, Clone)]
pub struct What3WordsConfig {
    /// API key; `None` degrades the adapter to mock data.
    pub api_key: Option<String>,
    /// Base URL for the what3words API.
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for What3WordsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl What3WordsConfig {
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

/// what3words search and conversion adapter.
#[derive(Debug)]
pub struct What3Words {
    client: Client,
    config: What3WordsConfig,
}

impl What3Words {
    /// Create an adapter with default configuration and the given key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(api_key: Option<String>) -> Result<Self, AdapterBuildError> {
        Self::with_config(What3WordsConfig::new(api_key))
    }

    /// Create an adapter with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_config(config: What3WordsConfig) -> Result<Self, AdapterBuildError> {
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

    async fn suggest_live(
        &self,
        cleaned: &str,
        key: &str,
    ) -> Result<Vec<ThreeWordAddress>, ProviderError> {
        let url = self.endpoint("autosuggest");
        let timeout_secs = self.config.timeout.as_secs();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("input", cleaned),
                ("clip-to-country", "IN"),
                ("key", key),
            ])
            .send()
            .await
            .map_err(|err| convert_reqwest_error(&err, &url, timeout_secs))?
            .error_for_status()
            .map_err(|err| convert_reqwest_error(&err, &url, timeout_secs))?;

        let body: api::AutosuggestResponse =
            response.json().await.map_err(|err| ProviderError::Parse {
                message: err.to_string(),
            })?;

        // Suggestions carry no coordinates; resolve each concurrently.
        let conversions = body
            .suggestions
            .into_iter()
            .take(SUGGESTION_LIMIT)
            .map(|suggestion| async move {
                match self.convert_live(&suggestion.words, key).await {
                    Ok(address) => Some(address),
                    Err(err) => {
                        log::warn!("failed to resolve suggestion {}: {err}", suggestion.words);
                        None
                    }
                }
            });
        Ok(join_all(conversions).await.into_iter().flatten().collect())
    }

    async fn convert_live(
        &self,
        cleaned: &str,
        key: &str,
    ) -> Result<ThreeWordAddress, ProviderError> {
        let url = self.endpoint("convert-to-coordinates");
        let timeout_secs = self.config.timeout.as_secs();
        let response = self
            .client
            .get(&url)
            .query(&[("words", cleaned), ("key", key)])
            .send()
            .await
            .map_err(|err| convert_reqwest_error(&err, &url, timeout_secs))?
            .error_for_status()
            .map_err(|err| convert_reqwest_error(&err, &url, timeout_secs))?;

        response.json().await.map_err(|err| ProviderError::Parse {
            message: err.to_string(),
        })
    }
}

#[async_trait]
impl ThreeWordResolver for What3Words {
    async fn suggest(&self, query: &str) -> Result<Vec<ThreeWordAddress>, ProviderError> {
        if query.trim().chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }

        let cleaned = words::normalise(query.trim());
        if !words::third_word_started(cleaned) {
            log::debug!("no w3w suggestions for {query:?}: third word not started");
            return Ok(Vec::new());
        }

        if let Some(key) = self.config.api_key.clone() {
            match self.suggest_live(cleaned, &key).await {
                Ok(results) if !results.is_empty() => return Ok(results),
                Ok(_) => {}
                Err(err) => log::warn!("w3w autosuggest failed, using mock data: {err}"),
            }
        }

        Ok(mock::filter_suggestions(cleaned))
    }

    async fn convert(&self, input: &str) -> Result<Option<ThreeWordAddress>, ProviderError> {
        let cleaned = words::normalise(input.trim());
        if cleaned.is_empty() {
            return Ok(None);
        }

        if let Some(key) = self.config.api_key.clone() {
            match self.convert_live(cleaned, &key).await {
                Ok(address) => return Ok(Some(address)),
                Err(err) => log::warn!("w3w convert failed, using mock data: {err}"),
            }
        }

        Ok(Some(mock::convert_fallback(cleaned)))
    }
}
