use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::tensor::{ImageTensor, CHANNELS};
use crate::library::logger::interface::Logger;
use std::sync::Arc;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let (height, width) = (
            config.input_shape.0 as usize,
            config.input_shape.1 as usize,
        );
        let shape = if config.channels_first {
            tvec!(1, CHANNELS, height, width)
        } else {
            tvec!(1, height, width, CHANNELS)
        };

        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)?
            .with_input_fact(0, InferenceFact::dt_shape(f32::datum_type(), shape))?
            .into_optimized()?
            .into_runnable()?;

        let logger = logger.with_namespace("image_classifier").with_namespace("tract");
        logger.info(&format!("Loaded model {}", config.onnx_model_path))?;

        Ok(Self {
            model,
            config,
            logger,
        })
    }

    fn to_input(&self, tensor: &ImageTensor) -> Result<Tensor, Box<dyn std::error::Error + Send + Sync>> {
        let [height, width, _] = tensor.shape();
        let expected = (
            self.config.input_shape.0 as usize,
            self.config.input_shape.1 as usize,
        );
        if (height, width) != expected {
            return Err(format!(
                "tensor is {}x{}, model expects {}x{}",
                height, width, expected.0, expected.1
            )
            .into());
        }

        let data = tensor.data();
        let input = if self.config.channels_first {
            tract_ndarray::Array4::from_shape_fn((1, CHANNELS, height, width), |(_, c, y, x)| {
                data[(y * width + x) * CHANNELS + c]
            })
        } else {
            tract_ndarray::Array4::from_shape_vec((1, height, width, CHANNELS), data.to_vec())?
        };

        Ok(input.into_tensor())
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn predict(
        &self,
        tensor: &ImageTensor,
    ) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        let input = self.to_input(tensor)?;
        let outputs = self.model.run(tvec!(input.into_tvalue()))?;

        let output = outputs.first().ok_or("model produced no outputs")?;
        let scores: Vec<f32> = output.to_array_view::<f32>()?.iter().copied().collect();

        self.logger
            .info(&format!("Predicted {} scores", scores.len()))?;

        Ok(scores)
    }
}
