pub mod impl_fake;
#[cfg(feature = "backend-tract")]
pub mod impl_tract_onnx;
pub mod interface;
pub mod models;
pub mod tensor;
