//! Provider traits and their shared error type.
//!
//! Each external mapping vendor sits behind one or more of these
//! traits. Implementations translate the normalised request into a
//! vendor call and the vendor's JSON back into the crate's domain
//! types; the aggregation layer only ever sees these interfaces.

use async_trait::async_trait;
use geo::Coord;
use thiserror::Error;

use crate::{Route, SearchResult, ThreeWordAddress};

/// Queries shorter than this return empty results without any outbound
/// call, both in adapters and in the aggregator.
pub const MIN_QUERY_LEN: usize = 2;

/// Maximum number of results a search response may carry; adapters and
/// the aggregator both truncate to this.
pub const MAX_RESULTS: usize = 5;

/// Errors produced by provider adapters.
///
/// Carries enough context to log a useful message; orchestrators treat
/// any variant the same way (log, then degrade to a fallback source).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// The vendor returned an HTTP error status.
    #[error("request to {url} failed with status {status}: {message}")]
    Http {
        /// Fully qualified request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Short error description supplied by the server.
        message: String,
    },
    /// The request failed at the transport level.
    #[error("network error contacting {url}: {message}")]
    Network {
        /// Fully qualified request URL.
        url: String,
        /// Transport error description.
        message: String,
    },
    /// The request exceeded the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Fully qualified request URL.
        url: String,
        /// Configured timeout in seconds.
        timeout_secs: u64,
    },
    /// The vendor response could not be parsed into domain types.
    #[error("failed to parse provider response: {message}")]
    Parse {
        /// Parse failure description.
        message: String,
    },
    /// The vendor accepted the request but reported an application
    /// error (quota, auth, invalid parameters).
    #[error("provider rejected the request ({code}): {message}")]
    Service {
        /// Vendor status code, e.g. `REQUEST_DENIED`.
        code: String,
        /// Vendor-supplied message, possibly empty.
        message: String,
    },
}

/// Free-text place search against one vendor.
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    /// Search for places matching `query`, normalised and capped by the
    /// adapter.
    ///
    /// Adapters with no configured credentials degrade to their mock
    /// table and return `Ok`; an `Err` means a live call was attempted
    /// and failed.
    async fn search_places(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError>;
}

/// Turn-by-turn directions against one vendor.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Fetch a driving route between two coordinates.
    ///
    /// `Ok(None)` means the vendor found no route (or the adapter has
    /// no credentials); `Err` means a live call failed.
    async fn get_route(
        &self,
        origin: Coord<f64>,
        destination: Coord<f64>,
    ) -> Result<Option<Route>, ProviderError>;
}

/// Three-word-address search and conversion.
#[async_trait]
pub trait ThreeWordResolver: Send + Sync {
    /// Suggest three-word addresses for a partially typed query.
    ///
    /// Returns an empty list until the third word has started, per the
    /// vendor's autosuggest contract.
    async fn suggest(&self, query: &str) -> Result<Vec<ThreeWordAddress>, ProviderError>;

    /// Convert a full three-word address to coordinates.
    ///
    /// A leading `///` prefix is stripped before lookup.
    async fn convert(&self, words: &str) -> Result<Option<ThreeWordAddress>, ProviderError>;
}
