//! Code for loading and running the trained classification model

use crate::error::{Error, Result};
use ndarray::Array4;
use tch::{no_grad, CModule, Kind};

/// The single capability the pipeline needs from a loaded model: one
/// synchronous forward pass from an input tensor to a flat score vector.
///
/// The production implementation is [`TorchModel`]; pipeline tests
/// substitute stubs returning fixed vectors.
pub trait Model: Send + Sync {
    fn infer(&self, input: &Array4<f32>) -> Result<Vec<f32>>;
}

/// A pre-trained TorchScript classifier, loaded once at startup and
/// shared read-only for the lifetime of the process
#[derive(Debug)]
pub struct TorchModel {
    /// The loaded torch model
    model: CModule,
}

impl TorchModel {
    pub fn load(path: &str) -> Result<Self> {
        Ok(TorchModel {
            model: CModule::load(path)?,
        })
    }
}

/// Copy an NHWC tensor into a torch tensor of the same shape
fn to_torch(input: &Array4<f32>) -> tch::Tensor {
    let dims = input.shape().iter().map(|&d| d as i64).collect::<Vec<i64>>();
    let flat = input.iter().copied().collect::<Vec<f32>>();
    tch::Tensor::from_slice(&flat).view(&dims[..])
}

impl Model for TorchModel {
    fn infer(&self, input: &Array4<f32>) -> Result<Vec<f32>> {
        let input = to_torch(input);
        let output = no_grad(|| self.model.forward_ts(&[input]))
            .map_err(|e| Error::Inference(e.to_string()))?
            .softmax(-1, Some(Kind::Float));
        Vec::<f32>::try_from(&output.view([-1])).map_err(|e| Error::Inference(e.to_string()))
    }
}
