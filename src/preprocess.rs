//! Image preprocessing: raw upload bytes to the network's input tensor

use crate::config::{INPUT_CHANNELS, INPUT_SIZE};
use crate::error::Result;
use image::imageops::{self, FilterType};
use ndarray::Array4;

/// Convert raw image bytes into a `[1, 224, 224, 3]` tensor of `f32`
/// values in `[0.0, 1.0]`.
///
/// Any raster format the `image` crate recognizes is accepted, at any
/// input size and with 1, 3, or 4 source channels. The pixel grid is
/// forced to RGB (grayscale replicated, alpha dropped), stretched to
/// 224x224 with bilinear resampling (aspect ratio is not preserved),
/// and scaled by 1/255. No per-channel standardization is applied.
pub fn preprocess(bytes: &[u8]) -> Result<Array4<f32>> {
    let img = image::load_from_memory(bytes)?;

    // Force exactly 3 channels in RGB order
    let rgb = img.to_rgb8();

    // Stretch to the network's input size
    let resized = imageops::resize(&rgb, INPUT_SIZE, INPUT_SIZE, FilterType::Triangle);

    // Normalize to [0, 1] and add a batch dimension
    let data = resized
        .into_raw()
        .into_iter()
        .map(|v| v as f32 / 255.0)
        .collect::<Vec<f32>>();

    let shape = (1, INPUT_SIZE as usize, INPUT_SIZE as usize, INPUT_CHANNELS);
    Ok(Array4::from_shape_vec(shape, data).expect("resized buffer matches input shape"))
}
