//! Error types for the courtside CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CourtsideError>;

#[derive(Error, Debug)]
pub enum CourtsideError {
    #[error("HTTP request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("local store error: {message}")]
    Store { message: String },

    #[error("feed returned no {what}")]
    EmptyFeed { what: &'static str },

    #[error("team not found: {code}")]
    TeamNotFound { code: String },

    #[error("invalid season code: {code}")]
    InvalidSeason { code: String },

    #[error("unrecognized game date: {value}")]
    InvalidDate { value: String },

    #[error("unrecognized game status: {value}")]
    InvalidStatus { value: String },

    #[error("unrecognized competition phase: {value}")]
    InvalidPhase { value: String },

    #[error("unrecognized player position: {value}")]
    InvalidPosition { value: String },
}

// The storage layer reports failures through `anyhow`; everything above it
// works with the typed error.
impl From<anyhow::Error> for CourtsideError {
    fn from(err: anyhow::Error) -> Self {
        CourtsideError::Store {
            message: err.to_string(),
        }
    }
}
