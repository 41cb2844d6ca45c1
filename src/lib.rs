pub mod classifier;
pub mod error;
pub mod model;
pub mod preprocess;
pub mod server;
pub mod settings;

pub use classifier::Classifier;
pub use error::{Error, Result};
pub use model::{Model, TorchModel};

/// Neuroscan configuration -- fixed pipeline constants; everything
/// runtime-tunable lives in [`settings::Settings`]
pub mod config {
    /// Spatial input size expected by the network (square)
    pub const INPUT_SIZE: u32 = 224;

    /// Number of input channels (RGB)
    pub const INPUT_CHANNELS: usize = 3;

    /// Class labels, index-aligned with the model's output scores
    pub const CLASS_LABELS: [&str; 4] = ["glioma", "meningioma", "no tumor", "pituitary"];

    /// Default log filter when `RUST_LOG` is unset
    pub const RUST_LOG: &str = "info,actix_web=info";
}

/// Shared utility code
pub mod util {
}
