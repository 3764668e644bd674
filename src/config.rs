use chrono::Offset;
use crate::image_classifier::models::model_config::ModelConfig;

#[derive(Debug, Clone)]
pub struct Config {
    /// Emit per-step diagnostics from the analyzer.
    pub debug: bool,
    pub logger_timezone: chrono::FixedOffset,
    pub species_model: ModelConfig,
    pub disease_model: ModelConfig,
    /// Seed for the freshness jitter. `None` draws from OS entropy.
    pub jitter_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            logger_timezone: india_standard_time(),
            species_model: ModelConfig {
                onnx_model_path: "./models/species/model.onnx".to_string(),
                input_shape: (224, 224),
                channels_first: false,
            },
            disease_model: ModelConfig {
                onnx_model_path: "./models/disease/model.onnx".to_string(),
                input_shape: (224, 224),
                channels_first: false,
            },
            jitter_seed: None,
        }
    }
}

fn india_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap_or_else(|| chrono::Utc.fix())
}

impl Config {
    /// Defaults overridden by `FISH_SCAN_DEBUG` and `FISH_SCAN_SEED`.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let mut config = Self::default();

        if let Ok(value) = std::env::var("FISH_SCAN_DEBUG") {
            config.debug = matches!(value.to_lowercase().as_str(), "1" | "true" | "yes");
        }

        if let Ok(value) = std::env::var("FISH_SCAN_SEED") {
            config.jitter_seed = Some(
                value
                    .parse()
                    .map_err(|e| format!("invalid FISH_SCAN_SEED {:?}: {}", value, e))?,
            );
        }

        Ok(config)
    }
}
