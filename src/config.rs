use std::env;
use std::fmt;

use crate::errors::ConfigError;

const DEFAULT_API_PORT: u16 = 8080;
const DEFAULT_API_FOOTBALL_BASE_URL: &str = "https://v3.football.api-sports.io/";
const DEFAULT_FOOTBALL_DATA_BASE_URL: &str = "https://api.football-data.org/v2/";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_port: u16,
    pub log_format: LogFormat,
    pub api_football: ProviderConfig,
    pub football_data: ProviderConfig,
    pub defaults: QueryDefaults,
}

/// Credentials for one upstream provider.
#[derive(Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub token: String,
}

// keeps the token out of logs
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Values the accessors pin on every request that needs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDefaults {
    pub season: String,
    pub country_code: String,
    pub venue_country: String,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            season: "2021".to_string(),
            country_code: "IT".to_string(),
            venue_country: "Italy".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the config from any variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let require = |var: &'static str| get(var).ok_or(ConfigError::Missing(var));

        let api_port = match get("API_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "API_PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_API_PORT,
        };

        let log_format = match get("LOG_FORMAT").map(|v| v.trim().to_lowercase()) {
            None => LogFormat::Pretty,
            Some(v) if v == "pretty" => LogFormat::Pretty,
            Some(v) if v == "json" => LogFormat::Json,
            Some(v) => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    value: v,
                    reason: "expected `pretty` or `json`".to_string(),
                });
            }
        };

        let api_football = ProviderConfig {
            base_url: get("API_FOOTBALL_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_FOOTBALL_BASE_URL.to_string()),
            token: require("API_FOOTBALL_TOKEN")?,
        };

        let football_data = ProviderConfig {
            base_url: get("FOOTBALL_DATA_BASE_URL")
                .unwrap_or_else(|| DEFAULT_FOOTBALL_DATA_BASE_URL.to_string()),
            token: require("FOOTBALL_DATA_TOKEN")?,
        };

        let fallback = QueryDefaults::default();
        let defaults = QueryDefaults {
            season: get("SEASON").unwrap_or(fallback.season),
            country_code: get("LEAGUE_COUNTRY_CODE")
                .map(|c| c.trim().to_uppercase())
                .unwrap_or(fallback.country_code),
            venue_country: get("VENUE_COUNTRY").unwrap_or(fallback.venue_country),
        };

        Ok(Self {
            api_port,
            log_format,
            api_football,
            football_data,
            defaults,
        })
    }
}
