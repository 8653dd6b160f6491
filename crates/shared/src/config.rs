//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Exchange-rate provider configuration.
    pub fx: FxConfig,
}

/// Exchange-rate provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FxConfig {
    /// Base URL of the rate provider API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Provider API key, inserted into the request path when present.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://v6.exchangerate-api.com/v6".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SITEBOOKS").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
