use std::time::Duration;

use serde::Deserialize;

const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default = "default_server_port")]
    pub server_port: u16,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_server_port() -> u16 {
    DEFAULT_SERVER_PORT
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            server_port: DEFAULT_SERVER_PORT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Creates a new `AppConfig` by reading from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable is set but cannot be parsed.
    pub fn new_from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config: AppConfig = envy::from_iter(vars(&[])).expect("defaults should apply");

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_reads_overrides() {
        let config: AppConfig = envy::from_iter(vars(&[
            ("SERVER_PORT", "9000"),
            ("REQUEST_TIMEOUT_SECS", "30"),
        ]))
        .expect("overrides should parse");

        assert_eq!(config.server_port, 9000);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_rejects_invalid_port() {
        let result: Result<AppConfig, _> =
            envy::from_iter(vars(&[("SERVER_PORT", "not-a-port")]));

        assert!(result.is_err());
    }
}
