use analysis::analyzer::Analyzer;
use analysis::random::{impl_rand::RandomSourceRand, interface::RandomSource};
use config::Config;
use fish_scanner::main::FishScanner;
use image::DynamicImage;
use image_classifier::interface::ImageClassifier;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use serde::Deserialize;
use std::sync::Arc;

mod analysis;
mod config;
mod fish_scanner;
mod image_classifier;
mod library;

type Classifiers = (
    Arc<dyn ImageClassifier + Send + Sync>,
    Arc<dyn ImageClassifier + Send + Sync>,
);

/// Raw model output saved as `{ "species": [...], "disease": [...] }`.
#[derive(Debug, Deserialize)]
struct RawVectors {
    species: Vec<f32>,
    disease: Vec<f32>,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env()?;

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let random: Arc<dyn RandomSource + Send + Sync> = match config.jitter_seed {
        Some(seed) => Arc::new(RandomSourceRand::seeded(seed)),
        None => Arc::new(RandomSourceRand::new()),
    };

    let result = match std::env::args().nth(1) {
        Some(path) => {
            logger.info(&format!("Reading raw vectors from {}", path))?;
            let vectors: RawVectors = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
            let analyzer = Analyzer::new(&config, logger.clone(), random);
            analyzer.analyze(&vectors.species, &vectors.disease)
        }
        None => {
            let (species_classifier, disease_classifier) = classifiers(&config, logger.clone())?;
            let fish_scanner = FishScanner::new(
                config,
                logger.clone(),
                species_classifier,
                disease_classifier,
                random,
            );
            fish_scanner.scan(&DynamicImage::new_rgb8(224, 224))
        }
    };

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

#[cfg(feature = "backend-tract")]
fn classifiers(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Classifiers, Box<dyn std::error::Error + Send + Sync>> {
    use image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;

    let species_classifier: Arc<dyn ImageClassifier + Send + Sync> = Arc::new(
        ImageClassifierTractOnnx::new(config.species_model.clone(), logger.clone())?,
    );
    let disease_classifier: Arc<dyn ImageClassifier + Send + Sync> =
        Arc::new(ImageClassifierTractOnnx::new(config.disease_model.clone(), logger)?);

    Ok((species_classifier, disease_classifier))
}

#[cfg(not(feature = "backend-tract"))]
fn classifiers(
    _config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Classifiers, Box<dyn std::error::Error + Send + Sync>> {
    use analysis::labels::{DISEASE_LABELS, SPECIES_LABELS};
    use image_classifier::impl_fake::ImageClassifierFake;

    let species_classifier: Arc<dyn ImageClassifier + Send + Sync> = Arc::new(
        ImageClassifierFake::random(logger.clone(), SPECIES_LABELS.len()),
    );
    let disease_classifier: Arc<dyn ImageClassifier + Send + Sync> =
        Arc::new(ImageClassifierFake::random(logger, DISEASE_LABELS.len()));

    Ok((species_classifier, disease_classifier))
}
