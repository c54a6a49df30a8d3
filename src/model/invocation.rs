use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::date_key::DateKey;
use crate::error::DispatchError;

/// Error label reported for every failed invocation.
pub const FAILURE_LABEL: &str = "Failed to send notification";
/// Message reported after a successful publish.
pub const SENT_MESSAGE: &str = "Notification sent successfully";

/// How a successful dispatch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Upstream had nothing for the day; nothing was published.
    NoMatches { date: DateKey },
    /// A summary was published to the topic.
    Sent {
        date: DateKey,
        match_count: usize,
        message_id: Option<String>,
    },
}

impl Outcome {
    /// Human-readable message carried in the success body.
    pub fn message(&self) -> String {
        match self {
            Outcome::NoMatches { date } => format!("No matches available for {}", date),
            Outcome::Sent { .. } => SENT_MESSAGE.to_string(),
        }
    }
}

/// The value handed back to the Lambda runtime: a status code and a JSON body
/// serialized as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResult {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl InvocationResult {
    pub fn success(outcome: &Outcome) -> Self {
        InvocationResult {
            status_code: 200,
            body: json!({ "message": outcome.message() }).to_string(),
        }
    }

    pub fn failure(error: &DispatchError) -> Self {
        InvocationResult {
            status_code: 500,
            body: json!({ "error": FAILURE_LABEL, "details": error.to_string() }).to_string(),
        }
    }

    /// Parse the body back into JSON; handy for callers inspecting the result.
    pub fn body_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.body)
    }
}

impl From<Result<Outcome, DispatchError>> for InvocationResult {
    fn from(result: Result<Outcome, DispatchError>) -> Self {
        match result {
            Ok(outcome) => InvocationResult::success(&outcome),
            Err(e) => InvocationResult::failure(&e),
        }
    }
}
