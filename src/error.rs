use thiserror::Error;

#[derive(Debug, Error)]
pub enum BalanceError {
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("{0}")]
    InputValidation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, BalanceError>;
