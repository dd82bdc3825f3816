use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SystemError {
    #[error("Invalid configuration for {key}: {reason}")]
    Config { key: String, reason: String },
    #[error("Actor task failed: {0}")]
    Shutdown(String),
}
