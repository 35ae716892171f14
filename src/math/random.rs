use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed reals used to initialise layer parameters.
///
/// Callers pass one source to every layer they build, so a single stream
/// covers the whole network instead of one stream per layer.
pub trait RandomSource {
    /// Returns a value in `[min, max)`. Requires `min < max`.
    fn uniform(&mut self, min: f64, max: f64) -> f64;
}

/// A `StdRng` wrapper that can be seeded for reproducible networks.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> SeededRandom {
        SeededRandom { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> SeededRandom {
        SeededRandom { rng: StdRng::from_entropy() }
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        self.rng.gen_range(min..max)
    }
}

impl RandomSource for ThreadRng {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        self.gen_range(min..max)
    }
}

/// Fills a vector with `len` values drawn from `rng` in `[min, max)`.
pub fn random_vector(rng: &mut dyn RandomSource, len: usize, min: f64, max: f64) -> Vec<f64> {
    (0..len).map(|_| rng.uniform(min, max)).collect()
}
