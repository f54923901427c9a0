use thiserror::Error;

/// Why the works document could not be turned into records.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("failed to load works.json (HTTP {0})")]
    Status(u16),
    #[error("works.json is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("works.json must be an array")]
    NotArray,
}
