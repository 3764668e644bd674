pub trait RandomSource: Send + Sync {
    /// Draws from `[low, high)`. Returns `low` when the range is empty.
    fn uniform(&self, low: f32, high: f32) -> f32;
}
