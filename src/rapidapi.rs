use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, info_span, instrument};

use crate::config::ApiConfig;
use crate::date_key::DateKey;
use crate::error::DispatchError;
use crate::model::fixture::{extract_matches, MatchRecord};

/// Source of the day's fixtures.
#[async_trait]
pub trait MatchFeed: Send + Sync {
    async fn matches_for(&self, date: &DateKey) -> Result<Vec<MatchRecord>, DispatchError>;
}

/// Build the HTTP agent shared by every invocation. Non-2xx responses come back
/// as responses so the status text can be reported.
pub fn build_agent() -> ureq::Agent {
    let config = ureq::Agent::config_builder().http_status_as_error(false).build();
    ureq::Agent::new_with_config(config)
}

/// Client for the RapidAPI live football data endpoint.
#[derive(Debug, Clone)]
pub struct RapidApi {
    agent: ureq::Agent,
    config: ApiConfig,
}

impl RapidApi {
    pub fn new(agent: ureq::Agent, config: ApiConfig) -> Self {
        Self { agent, config }
    }

    /// Blocking fetch of the raw JSON payload for `date`.
    fn fetch_payload(agent: &ureq::Agent, config: &ApiConfig, date: &str) -> Result<Value, DispatchError> {
        let response_result = {
            let _span = info_span!("rapidapi_fetch", url = %config.endpoint, date = %date).entered();
            agent
                .get(&config.endpoint)
                .query("date", date)
                .header("X-RapidAPI-Host", config.host.as_str())
                .header("X-RapidAPI-Key", config.key.as_str())
                .call()
        };

        let response = response_result.map_err(|e| DispatchError::Fetch(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or_else(|| status.as_str());
            return Err(DispatchError::Fetch(format!("Failed to fetch data: {}", status_text)));
        }

        let mut body_reader = response.into_body();
        let body = body_reader
            .read_to_string()
            .map_err(|e| DispatchError::Fetch(format!("Failed to read response body: {}", e)))?;
        info!(bytes = body.len(), body = %body, "API response");

        serde_json::from_str::<Value>(&body).map_err(|e| DispatchError::Parse(e.to_string()))
    }
}

#[async_trait]
impl MatchFeed for RapidApi {
    #[instrument(skip(self, date), fields(date = %date))]
    async fn matches_for(&self, date: &DateKey) -> Result<Vec<MatchRecord>, DispatchError> {
        // The blocking task must own its inputs
        let agent = self.agent.clone();
        let config = self.config.clone();
        let date = date.as_str().to_string();

        let payload = tokio::task::spawn_blocking(move || Self::fetch_payload(&agent, &config, &date))
            .await
            .map_err(|e| DispatchError::Fetch(format!("Fetch task failed: {}", e)))??;

        extract_matches(&payload).map_err(|e| DispatchError::Parse(e.to_string()))
    }
}
