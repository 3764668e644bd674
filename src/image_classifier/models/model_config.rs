#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(not(feature = "backend-tract"), allow(dead_code))]
pub struct ModelConfig {
    pub onnx_model_path: String,
    /// (height, width)
    pub input_shape: (u32, u32),
    /// Feed `[1, 3, H, W]` instead of `[1, H, W, 3]`.
    pub channels_first: bool,
}
