use rand::Rng;

/// Source of uniform random integers for the draw engine.
pub trait RandomSource: Send + Sync {
    /// A uniformly distributed integer in `0..upper`. `upper` is never 0.
    fn below(&self, upper: u64) -> u64;
}

/// Thread-local generator seeded from the OS, reseeded periodically by `rand`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn below(&self, upper: u64) -> u64 {
        rand::rng().random_range(0..upper)
    }
}
