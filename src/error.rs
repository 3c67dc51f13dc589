use thiserror::Error;

#[derive(Debug, Error)]
pub enum PgOptionsError {
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
