//! Error types for the inference pipeline

use thiserror::Error;

/// Everything that can go wrong between raw upload bytes and a label
#[derive(Error, Debug)]
pub enum Error {
    /// The input bytes are not a recognizable image
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// A tensor of the wrong shape reached the classifier
    #[error("tensor shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: [usize; 4],
        actual: Vec<usize>,
    },

    /// The model's forward pass failed
    #[error("model inference failed: {0}")]
    Inference(String),

    /// The model's output size does not match the label table
    #[error("label table mismatch: model produced {scores} scores for {labels} labels")]
    Configuration { scores: usize, labels: usize },

    /// The model artifact could not be loaded at startup
    #[error("failed to load model artifact: {0}")]
    ModelLoad(#[from] tch::TchError),
}

pub type Result<T> = std::result::Result<T, Error>;
