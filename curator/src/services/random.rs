//! Random number sources

use std::sync::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::traits::RandomSource;

/// Thread-local RNG used in production
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().r#gen::<f64>()
    }

    fn next_index(&self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Seeded RNG giving reproducible sequences
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&self) -> f64 {
        self.with_rng(|rng| rng.r#gen::<f64>())
    }

    fn next_index(&self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.with_rng(|rng| rng.gen_range(0..bound))
    }
}
