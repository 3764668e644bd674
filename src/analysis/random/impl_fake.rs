use crate::analysis::random::interface::RandomSource;

/// Always lands at the same relative position inside the requested range.
#[derive(Debug, Clone, Copy)]
pub struct RandomSourceFake {
    position: f32,
}

impl RandomSourceFake {
    /// `position` is clamped to `[0, 1]`; 0 yields `low`, 0.5 the midpoint.
    pub fn new(position: f32) -> Self {
        Self {
            position: position.clamp(0.0, 1.0),
        }
    }
}

impl RandomSource for RandomSourceFake {
    fn uniform(&self, low: f32, high: f32) -> f32 {
        if high <= low {
            return low;
        }
        low + (high - low) * self.position
    }
}
