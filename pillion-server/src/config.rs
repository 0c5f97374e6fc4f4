//! Environment-derived server configuration.
//!
//! All vendor keys are optional: a missing key degrades that provider
//! to mock data rather than failing startup, so a checkout runs with no
//! credentials at all.

/// Default bind address.
const DEFAULT_BIND: &str = "0.0.0.0";

/// Default listen port.
const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Google Maps API key (`GOOGLE_MAPS_API_KEY`).
    pub google_maps_api_key: Option<String>,
    /// Mapbox access token (`MAPBOX_API_KEY`).
    pub mapbox_api_key: Option<String>,
    /// what3words API key (`W3W_API_KEY`).
    pub w3w_api_key: Option<String>,
    /// Bind address (`PILLION_BIND`).
    pub bind: String,
    /// Listen port (`PILLION_PORT`).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            google_maps_api_key: None,
            mapbox_api_key: None,
            w3w_api_key: None,
            bind: DEFAULT_BIND.to_owned(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary lookup function.
    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PILLION_PORT").map(|raw| raw.parse::<u16>()) {
            None => DEFAULT_PORT,
            Some(Ok(port)) => port,
            Some(Err(err)) => {
                tracing::warn!("invalid PILLION_PORT ({err}); using {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        Self {
            google_maps_api_key: non_empty(lookup("GOOGLE_MAPS_API_KEY")),
            mapbox_api_key: non_empty(lookup("MAPBOX_API_KEY")),
            w3w_api_key: non_empty(lookup("W3W_API_KEY")),
            bind: lookup("PILLION_BIND").unwrap_or_else(|| DEFAULT_BIND.to_owned()),
            port,
        }
    }

    /// The `bind:port` address the server listens on.
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

/// Treat empty or whitespace-only variables as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(|_| None);

        assert_eq!(config.listen_addr(), "0.0.0.0:5000");
        assert_eq!(config.google_maps_api_key, None);
        assert_eq!(config.mapbox_api_key, None);
        assert_eq!(config.w3w_api_key, None);
    }

    #[rstest]
    fn variables_override_defaults() {
        let config = ServerConfig::from_lookup(|key| match key {
            "GOOGLE_MAPS_API_KEY" => Some("g-key".to_owned()),
            "PILLION_BIND" => Some("127.0.0.1".to_owned()),
            "PILLION_PORT" => Some("8080".to_owned()),
            _ => None,
        });

        assert_eq!(config.google_maps_api_key.as_deref(), Some("g-key"));
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_keys_count_as_absent(#[case] value: &str) {
        let config = ServerConfig::from_lookup(|key| match key {
            "MAPBOX_API_KEY" => Some(value.to_owned()),
            _ => None,
        });

        assert_eq!(config.mapbox_api_key, None);
    }

    #[rstest]
    fn unparseable_port_falls_back_to_default() {
        let config = ServerConfig::from_lookup(|key| match key {
            "PILLION_PORT" => Some("not-a-port".to_owned()),
            _ => None,
        });

        assert_eq!(config.port, 5000);
    }
}
