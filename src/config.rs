use std::env;

use chrono_tz::Tz;

use crate::date_key::DateZone;
use crate::error::DispatchError;

/// Upstream endpoint used when `RAPIDAPI_ENDPOINT` is not set.
pub const DEFAULT_ENDPOINT: &str =
    "https://free-api-live-football-data.p.rapidapi.com/football-get-matches-by-date";

/// Credentials and location of the match-data API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub endpoint: String,
    pub host: String,
    pub key: String,
}

/// Everything one invocation needs from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub topic_arn: String,
    pub test_topic_arn: Option<String>,
    pub zone: DateZone,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, DispatchError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup (tests pass a map instead of
    /// touching the real environment).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DispatchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Treat empty values the same as unset ones
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| DispatchError::Config(format!("{} must be set", key)))
        };

        let api = ApiConfig {
            endpoint: get("RAPIDAPI_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            host: require("RAPID_HOST")?,
            key: require("RAPIDAPI_KEY")?,
        };
        let topic_arn = require("SNS_TOPIC_ARN")?;
        let test_topic_arn = get("TEST_SNS_TOPIC_ARN");

        let zone = match get("MATCH_TIMEZONE") {
            Some(name) => {
                let tz = name.parse::<Tz>().map_err(|_| {
                    DispatchError::Config(format!("MATCH_TIMEZONE is not a known zone: {}", name))
                })?;
                DateZone::Named(tz)
            }
            None => DateZone::Local,
        };

        Ok(Config { api, topic_arn, test_topic_arn, zone })
    }
}
