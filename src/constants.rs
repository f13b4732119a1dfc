//! Application constants and configuration

pub const APP_NAME: &str = "Plant Doctor";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prediction service endpoint
pub const PREDICT_URL: &str = "http://127.0.0.1:8000/predict/";

/// Label shown when a prediction request fails for any reason
pub const PREDICTION_FAILED: &str = "Prediction failed.";

/// Extensions offered by the file picker
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp", "gif", "tif", "tiff"];
