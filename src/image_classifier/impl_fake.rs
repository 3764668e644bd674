use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::tensor::ImageTensor;
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

enum Output {
    Fixed(Vec<f32>),
    Random(usize),
    Failing(String),
}

pub struct ImageClassifierFake {
    output: Output,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierFake {
    /// Always predicts `scores`.
    pub fn fixed(logger: Arc<dyn Logger + Send + Sync>, scores: Vec<f32>) -> Self {
        Self::with_output(logger, Output::Fixed(scores))
    }

    /// Predicts `len` uniform scores in `[0, 1)`.
    pub fn random(logger: Arc<dyn Logger + Send + Sync>, len: usize) -> Self {
        Self::with_output(logger, Output::Random(len))
    }

    #[allow(dead_code)]
    pub fn failing(logger: Arc<dyn Logger + Send + Sync>, message: &str) -> Self {
        Self::with_output(logger, Output::Failing(message.to_string()))
    }

    fn with_output(logger: Arc<dyn Logger + Send + Sync>, output: Output) -> Self {
        Self {
            output,
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn predict(
        &self,
        tensor: &ImageTensor,
    ) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("Classifying tensor {:?}...", tensor.shape()))?;

        match &self.output {
            Output::Fixed(scores) => Ok(scores.clone()),
            Output::Random(len) => {
                let mut rng = rand::rng();
                let confidence_dist = Uniform::new(0.0f32, 1.0)?;
                Ok((0..*len)
                    .map(|_| confidence_dist.sample(&mut rng))
                    .collect())
            }
            Output::Failing(message) => Err(message.clone().into()),
        }
    }
}
