//! Shared helpers for the HTTP adapters.

use pillion_core::ProviderError;

/// Convert a reqwest error into the provider error taxonomy.
pub(crate) fn convert_reqwest_error(
    error: &reqwest::Error,
    url: &str,
    timeout_secs: u64,
) -> ProviderError {
    if error.is_timeout() {
        return ProviderError::Timeout {
            url: url.to_owned(),
            timeout_secs,
        };
    }

    if let Some(status) = error.status() {
        return ProviderError::Http {
            url: url.to_owned(),
            status: status.as_u16(),
            message: error.to_string(),
        };
    }

    ProviderError::Network {
        url: url.to_owned(),
        message: error.to_string(),
    }
}

/// True when the query is too short to search for.
pub(crate) fn below_min_length(query: &str) -> bool {
    query.trim().chars().count() < pillion_core::MIN_QUERY_LEN
}
