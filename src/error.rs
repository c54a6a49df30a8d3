use thiserror::Error;

/// Every way a dispatch can fail. The caller only ever sees the generic 500
/// result; the variant tells logs and tests where it broke.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Missing or invalid configuration: {0}")]
    Config(String),
    #[error("{0}")]
    Fetch(String),
    #[error("Failed to parse match data: {0}")]
    Parse(String),
    #[error("Failed to publish notification: {0}")]
    Publish(String),
}
