use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://api.edamam.com/api/recipes/v2";
pub const DEFAULT_QUERY: &str = "chicken";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub app_id: String,
    pub app_key: String,
    pub api_url: String,
    pub default_query: String,
    pub preload: bool,
    pub http_timeout: Duration,
    pub log_level: String,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let app_id = get("RECIPE_APP_ID").ok_or(ConfigError::Missing("RECIPE_APP_ID"))?;
        let app_key = get("RECIPE_APP_KEY").ok_or(ConfigError::Missing("RECIPE_APP_KEY"))?;

        let api_url = get("RECIPE_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if reqwest::Url::parse(&api_url).is_err() {
            return Err(ConfigError::Invalid { key: "RECIPE_API_URL", value: api_url });
        }

        let preload = match get("RECIPE_PRELOAD") {
            None => true,
            Some(v) => match v.to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => return Err(ConfigError::Invalid { key: "RECIPE_PRELOAD", value: v }),
            },
        };

        let timeout_secs = match get("RECIPE_HTTP_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT_SECS,
            Some(v) => match v.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::Invalid { key: "RECIPE_HTTP_TIMEOUT_SECS", value: v }),
            },
        };

        Ok(Self {
            app_id,
            app_key,
            api_url,
            default_query: get("RECIPE_DEFAULT_QUERY").unwrap_or_else(|| DEFAULT_QUERY.to_string()),
            preload,
            http_timeout: Duration::from_secs(timeout_secs),
            log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}
