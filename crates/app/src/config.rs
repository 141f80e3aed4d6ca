use shared_types::{ApiConfig, AppConfig};
use std::sync::OnceLock;

/// `config.toml` is compiled in so the web build needs no filesystem access.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Parse the embedded config once. Safe to call multiple times.
///
/// An unparseable file logs the error and falls back to defaults.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let (config, err) = AppConfig::from_toml_str(CONFIG_TOML);
        match err {
            Some(e) => tracing::error!(error = %e, "config.toml is invalid, using defaults"),
            None => tracing::info!(base_url = %config.api.base_url, "loaded config.toml"),
        }
        config
    })
}

/// Shortcut for the API section.
pub fn api_config() -> &'static ApiConfig {
    &app_config().api
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses_cleanly() {
        let (_, err) = AppConfig::from_toml_str(CONFIG_TOML);
        assert!(err.is_none(), "config.toml failed to parse: {err:?}");
    }

    #[test]
    fn api_config_has_absolute_base_url() {
        let api = api_config();
        assert!(api.base_url.starts_with("http://") || api.base_url.starts_with("https://"));
        assert!(api.timeout_secs > 0);
    }
}
