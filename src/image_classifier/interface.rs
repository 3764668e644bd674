use crate::image_classifier::tensor::ImageTensor;

pub trait ImageClassifier {
    /// Raw scores, index-aligned to the model's label order.
    fn predict(
        &self,
        tensor: &ImageTensor,
    ) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>>;
}
