//! Failure taxonomy for loading the catalog document.
//!
//! Only loading can fail. Classification, rendering and filtering are total
//! over a well-formed catalog, so they define no error kinds of their own.

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The data document could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("fetching {location} returned non-success status {status}")]
    Status { location: String, status: u16 },

    #[error("fetching {location} failed: {source}")]
    Transport {
        location: String,
        #[source]
        source: BoxError,
    },
}

impl FetchError {
    pub fn transport(location: impl Into<String>, source: impl Into<BoxError>) -> Self {
        FetchError::Transport {
            location: location.into(),
            source: source.into(),
        }
    }
}

/// The retrieved body is not a catalog document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("catalog document is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("catalog document does not match the expected shape:\n{details}")]
    Shape { details: String },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
