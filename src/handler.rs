use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::config::Config;
use crate::dispatcher::NotificationDispatcher;
use crate::error::DispatchError;
use crate::model::invocation::{InvocationResult, Outcome};
use crate::rapidapi::RapidApi;
use crate::sns::SnsPublisher;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Test,
    #[default]
    Production,
}

/// The few fields read from the trigger event. Everything else in the event is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub mode: Mode,
}

impl Request {
    /// Read a request from an arbitrary trigger event. Events without a `mode`
    /// key (scheduled events, `null`) get the default; a `mode` that is present
    /// but not recognised is rejected rather than falling back to production.
    pub fn from_event(payload: Value) -> Result<Self, DispatchError> {
        let Some(mode) = payload.get("mode") else {
            debug!("Trigger event carries no mode; using defaults");
            return Ok(Request::default());
        };
        let mode = Mode::deserialize(mode)
            .map_err(|e| DispatchError::Config(format!("Unrecognised mode in trigger event: {}", e)))?;
        Ok(Request { mode })
    }
}

/// Long-lived clients, built once per process and shared by every invocation.
#[derive(Debug, Clone)]
pub struct Clients {
    pub http: ureq::Agent,
    pub sns: aws_sdk_sns::Client,
}

/// Pick the topic for the requested mode.
pub fn topic_for(config: &Config, mode: Mode) -> Result<String, DispatchError> {
    match mode {
        Mode::Production => Ok(config.topic_arn.clone()),
        Mode::Test => config
            .test_topic_arn
            .clone()
            .ok_or_else(|| DispatchError::Config("TEST_SNS_TOPIC_ARN must be set for test mode".to_string())),
    }
}

/// Collapse a dispatch result into the value returned to the runtime, logging the terminal outcome.
pub fn into_result(result: Result<Outcome, DispatchError>) -> InvocationResult {
    match &result {
        Ok(outcome) => info!(outcome = ?outcome, "Invocation finished"),
        Err(e) => error!(error = %e, "Error: {}", e),
    }
    InvocationResult::from(result)
}

async fn run(clients: &Clients, request: &Request) -> Result<Outcome, DispatchError> {
    // Config is read per invocation so a missing variable ends in the generic failure result
    let config = Config::from_env()?;
    let topic_arn = topic_for(&config, request.mode)?;

    let dispatcher = NotificationDispatcher::new(
        Arc::new(RapidApi::new(clients.http.clone(), config.api)),
        Arc::new(SnsPublisher::new(clients.sns.clone(), topic_arn)),
        config.zone,
    );
    dispatcher.dispatch(chrono::Utc::now()).await
}

#[instrument(skip(clients, event))]
pub async fn handler(clients: &Clients, event: LambdaEvent<Value>) -> Result<InvocationResult, Error> {
    let result = match Request::from_event(event.payload) {
        Ok(request) => {
            info!(mode = ?request.mode, "Handling invocation");
            run(clients, &request).await
        }
        Err(e) => Err(e),
    };
    Ok(into_result(result))
}
