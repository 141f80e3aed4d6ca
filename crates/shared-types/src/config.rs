use serde::{Deserialize, Serialize};

/// Base URL used when `config.toml` does not name one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Request timeout used when `config.toml` does not name one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Settings for the consultations backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Only honoured on native targets; browsers own their own timeouts.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Absolute URL for an API path, tolerating a trailing slash on the base.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

impl AppConfig {
    /// Parse a config document. Invalid input yields the defaults and the
    /// parse error so the caller can log it.
    pub fn from_toml_str(contents: &str) -> (Self, Option<String>) {
        match toml::from_str::<AppConfig>(contents) {
            Ok(config) => (config, None),
            Err(e) => (AppConfig::default(), Some(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let (config, err) = AppConfig::from_toml_str("");
        assert!(err.is_none());
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let (config, err) = AppConfig::from_toml_str(
            r#"
            [api]
            base_url = "https://clinic.example.com"
            "#,
        );
        assert!(err.is_none());
        assert_eq!(config.api.base_url, "https://clinic.example.com");
        assert_eq!(config.api.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn invalid_toml_falls_back_with_error() {
        let (config, err) = AppConfig::from_toml_str("[api]\ntimeout_secs = \"soon\"");
        assert!(err.is_some());
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let api = ApiConfig {
            base_url: "http://localhost:8080/".into(),
            timeout_secs: 5,
        };
        assert_eq!(
            api.endpoint("/api/consultations"),
            "http://localhost:8080/api/consultations"
        );
        assert_eq!(
            api.endpoint("api/consultations"),
            "http://localhost:8080/api/consultations"
        );
    }
}
