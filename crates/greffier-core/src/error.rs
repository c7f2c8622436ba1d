use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid model response: {0}")]
    InvalidResponse(String),
}

pub type SummaryResult<T> = Result<T, SummaryError>;
