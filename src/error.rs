//! Error types for file intake and prediction requests

use std::path::PathBuf;

/// A prediction request that did not produce a usable result.
///
/// Every variant is surfaced to the user the same way (the failed-prediction
/// sentinel); the variants only exist so the log says what went wrong.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dropped file {0:?} has neither bytes nor a path")]
    NoContent(String),
}
