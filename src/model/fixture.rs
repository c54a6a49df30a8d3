use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Rendered in place of a team name the upstream left out.
pub const UNKNOWN_TEAM: &str = "Unknown Team";
/// Rendered in place of a kickoff time the upstream left out.
pub const UNKNOWN_TIME: &str = "TBD";

/// One side of a fixture. Upstream sends more fields; only the name is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
}

impl Side {
    pub fn named(name: &str) -> Self {
        Side { name: Some(name.to_string()) }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_TEAM)
    }
}

/// A single match as returned by the match-data API. `home` and `away` are
/// required; the text fields tolerate whatever the upstream sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub home: Side,
    pub away: Side,
    #[serde(default, deserialize_with = "lenient_text")]
    pub time: Option<String>,
}

impl MatchRecord {
    pub fn display_time(&self) -> &str {
        self.time.as_deref().unwrap_or(UNKNOWN_TIME)
    }
}

/// Accept strings as-is and render numbers, booleans and nested values as text.
/// `null` reads as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Pull `response.matches` out of an API payload.
///
/// A missing `response`, a `response` that is not an object, or a missing or
/// falsy `matches` (`null`, `false`, `0`, `""`) all mean "no matches". Any other
/// `matches` value must decode as a list of records.
pub fn extract_matches(payload: &Value) -> Result<Vec<MatchRecord>, serde_json::Error> {
    match payload.get("response").and_then(|r| r.get("matches")) {
        None => Ok(Vec::new()),
        Some(matches) if is_falsy(matches) => Ok(Vec::new()),
        Some(matches) => Vec::<MatchRecord>::deserialize(matches),
    }
}
