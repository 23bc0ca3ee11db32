use thiserror::Error;

/// Errors returned by gesture operations.
#[derive(Debug, Error)]
pub enum GestureError {
    /// A hand frame did not carry the expected number of landmarks.
    #[error("invalid input: expected {expected} landmarks, got {got}")]
    InvalidInput { expected: usize, got: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("parse config yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for gesture operations.
pub type Result<T> = std::result::Result<T, GestureError>;
