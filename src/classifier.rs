//! The classifier adapter: runs the loaded model on a preprocessed
//! tensor and resolves the output scores to a class label

use crate::config::{INPUT_CHANNELS, INPUT_SIZE};
use crate::error::{Error, Result};
use crate::model::Model;
use crate::preprocess::preprocess;
use ndarray::Array4;
use std::sync::Arc;

/// A loaded model paired with its index-aligned label table.
///
/// Both are immutable after construction, so a `Classifier` is safe to
/// share across any number of concurrent requests.
pub struct Classifier {
    model: Arc<dyn Model>,
    labels: Vec<String>,
}

impl Classifier {
    pub fn new(model: Arc<dyn Model>, labels: Vec<String>) -> Self {
        Classifier { model, labels }
    }

    /// Classify raw image bytes end to end: preprocess, then classify
    pub fn classify_image(&self, bytes: &[u8]) -> Result<String> {
        let tensor = preprocess(bytes)?;
        self.classify(&tensor)
    }

    /// Run one forward pass and return the highest-scoring label
    pub fn classify(&self, tensor: &Array4<f32>) -> Result<String> {
        let expected = [1, INPUT_SIZE as usize, INPUT_SIZE as usize, INPUT_CHANNELS];
        if tensor.shape() != &expected[..] {
            return Err(Error::ShapeMismatch {
                expected,
                actual: tensor.shape().to_vec(),
            });
        }

        let scores = self.model.infer(tensor)?;
        self.resolve(&scores)
    }

    /// Argmax into the label table; ties resolve to the lowest index
    fn resolve(&self, scores: &[f32]) -> Result<String> {
        if scores.len() != self.labels.len() {
            return Err(Error::Configuration {
                scores: scores.len(),
                labels: self.labels.len(),
            });
        }

        let mut best = 0;
        for (i, &score) in scores.iter().enumerate() {
            if score > scores[best] {
                best = i;
            }
        }
        Ok(self.labels[best].clone())
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
