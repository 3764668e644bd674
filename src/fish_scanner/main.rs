use crate::analysis::analyzer::Analyzer;
use crate::analysis::random::interface::RandomSource;
use crate::analysis::result::AnalysisResult;
use crate::config::Config;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tensor::ImageTensor;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;

/// Runs both classifiers on one photo and post-processes their output.
pub struct FishScanner {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub species_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    pub disease_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    pub analyzer: Analyzer,
}

impl FishScanner {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        species_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        disease_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        random: Arc<dyn RandomSource + Send + Sync>,
    ) -> Self {
        let analyzer = Analyzer::new(&config, logger.clone(), random);

        Self {
            config,
            logger: logger.with_namespace("fish_scanner"),
            species_classifier,
            disease_classifier,
            analyzer,
        }
    }

    /// Classifier failures are logged and yield [`AnalysisResult::fallback`].
    pub fn scan(&self, image: &DynamicImage) -> AnalysisResult {
        match self.classify(image) {
            Ok((species, disease)) => self.analyzer.analyze(&species, &disease),
            Err(e) => {
                let _ = self
                    .logger
                    .info(&format!("Classification failed, using fallback: {}", e));
                AnalysisResult::fallback()
            }
        }
    }

    fn classify(
        &self,
        image: &DynamicImage,
    ) -> Result<(Vec<f32>, Vec<f32>), Box<dyn std::error::Error + Send + Sync>> {
        let species_tensor = tensor_for(image, &self.config.species_model)?;
        let species = self.species_classifier.predict(&species_tensor)?;

        let disease = if self.config.disease_model.input_shape
            == self.config.species_model.input_shape
        {
            self.disease_classifier.predict(&species_tensor)?
        } else {
            let disease_tensor = tensor_for(image, &self.config.disease_model)?;
            self.disease_classifier.predict(&disease_tensor)?
        };

        Ok((species, disease))
    }
}

fn tensor_for(
    image: &DynamicImage,
    model: &ModelConfig,
) -> Result<ImageTensor, Box<dyn std::error::Error + Send + Sync>> {
    let (height, width) = model.input_shape;
    ImageTensor::from_image(image, width, height)
}
