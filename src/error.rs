use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required secret: {0}")]
    MissingSecret(String),

    #[error("malformed secrets file {path} at line {line}")]
    MalformedSecretsFile { path: String, line: usize },

    #[error("configuration inconsistency: {0}")]
    Inconsistency(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
