use crate::analysis::analyzer::Analyzer;
use crate::analysis::labels::SPECIES_LABELS;
use crate::analysis::random::{impl_fake::RandomSourceFake, interface::RandomSource};
use crate::config::Config;
use crate::library::logger::impl_fake::LoggerFake;
use std::sync::Arc;

pub struct Fixture {
    pub logger: LoggerFake,
    pub analyzer: Analyzer,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_debug(false)
    }

    pub fn with_debug(debug: bool) -> Self {
        let config = Config {
            debug,
            ..Config::default()
        };
        Self::with_random(&config, Arc::new(RandomSourceFake::new(0.5)))
    }

    pub fn with_random(config: &Config, random: Arc<dyn RandomSource + Send + Sync>) -> Self {
        let logger = LoggerFake::new();
        let analyzer = Analyzer::new(config, Arc::new(logger.clone()), random);

        Self { logger, analyzer }
    }
}

/// Species vector with the given labels set and every other score at zero.
pub fn species_vector(scores: &[(&str, f32)]) -> Vec<f32> {
    let mut vector = vec![0.0; SPECIES_LABELS.len()];
    for (label, score) in scores {
        let index = SPECIES_LABELS
            .iter()
            .position(|l| l == label)
            .unwrap_or_else(|| panic!("unknown species label {}", label));
        vector[index] = *score;
    }
    vector
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {}, got {}",
        expected,
        actual
    );
}
