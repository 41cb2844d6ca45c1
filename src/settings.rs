//! Runtime configuration for the serving binary

use serde::Deserialize;

/// Settings the binary needs at startup. Pipeline constants (input
/// geometry, label table) are compile-time and live in [`crate::config`].
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Port the HTTP server binds on
    pub port: u16,

    /// Path to the TorchScript model artifact
    pub model_path: String,

    /// When set, uploaded images are persisted here before classification
    pub upload_dir: Option<String>,
}

impl Settings {
    /// Load settings from an optional `neuroscan.toml` in the working
    /// directory, overridden by `NEUROSCAN_*` environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("port", 5001)?
            .set_default("model_path", "models/brain_tumors_vgg.pt")?
            .add_source(config::File::with_name("neuroscan").required(false))
            .add_source(config::Environment::with_prefix("NEUROSCAN"))
            .build()?
            .try_deserialize()
    }
}
