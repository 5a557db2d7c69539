//! Build-time Configuration
//!
//! The gateway URL and log level are baked in when the wasm bundle is built:
//! `PEDIDOS_API_URL=https://... PEDIDOS_LOG_LEVEL=debug trunk build`.

use std::str::FromStr;

use tracing::Level;

pub const DEFAULT_API_URL: &str = "https://api.pedidos.example.com/prod";
pub const DEFAULT_LOG_LEVEL: Level = Level::INFO;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Gateway base URL without trailing slash
    pub base_url: String,
    pub log_level: Level,
}

impl ApiConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PEDIDOS_API_URL"), option_env!("PEDIDOS_LOG_LEVEL"))
    }

    fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .and_then(|level| Level::from_str(level.trim()).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self { base_url, log_level }
    }

    /// Absolute URL of a gateway route such as `/pedidos`
    pub fn endpoint(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
