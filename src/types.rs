//! Common types and data structures

use crate::constants::PREDICTION_FAILED;
use std::sync::Arc;

/// An image chosen by the user, held in memory until the next selection
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Arc<[u8]>,
    pub mime: &'static str,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let bytes = bytes.into();
        let mime = image::guess_format(&bytes)
            .map(|f| f.to_mime_type())
            .unwrap_or("application/octet-stream");
        Self {
            name: name.into(),
            bytes,
            mime,
        }
    }
}

/// Display-ready outcome of one prediction
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PredictionResult {
    pub label: String,
    pub cause: String,
    pub solution: String,
    pub treatment: String,
}

impl PredictionResult {
    /// Fixed record shown when a request fails
    pub fn failed() -> Self {
        Self {
            label: PREDICTION_FAILED.to_string(),
            ..Self::default()
        }
    }
}

/// Response body from the prediction service
#[derive(Debug, serde::Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub cause: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
    /// Shown to the user under "Pesticide"
    #[serde(default)]
    pub fertilizer: Option<String>,
}
