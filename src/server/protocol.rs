use serde::{Deserialize, Serialize};

/// An uploaded image, encoded as base 64
#[derive(Deserialize)]
pub struct B64Image {
    pub image: String,
    pub filename: Option<String>,
}

/// A successful classification
#[derive(Debug, Serialize)]
pub struct Prediction {
    pub label: String,
}

/// Service description returned from the index route
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub version: &'static str,
    pub model: String,
    pub labels: Vec<String>,
}
