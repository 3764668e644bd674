use crate::analysis::random::interface::RandomSource;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Mutex;

pub struct RandomSourceRand {
    rng: Mutex<StdRng>,
}

impl RandomSourceRand {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for RandomSourceRand {
    fn uniform(&self, low: f32, high: f32) -> f32 {
        let dist = match Uniform::new(low, high) {
            Ok(dist) => dist,
            Err(_) => return low,
        };

        let mut rng = match self.rng.lock() {
            Ok(rng) => rng,
            Err(poisoned) => poisoned.into_inner(),
        };

        dist.sample(&mut *rng)
    }
}
