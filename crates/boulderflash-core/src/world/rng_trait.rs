//! RNG trait abstraction for the simulation
//!
//! Builder wandering and sludge growth draw from an injected generator so that
//! a seeded RNG reproduces a run exactly.

/// Random number generator trait for the simulation
pub trait WorldRng {
    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Generate a uniform index in [0, upper). `upper` must be non-zero.
    fn gen_index(&mut self, upper: usize) -> usize;

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }

    /// Uniformly permute `items` in place (Fisher-Yates)
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.gen_index(i + 1);
            items.swap(i, j);
        }
    }
}

// Covers ThreadRng as well as the seeded Xoshiro generators
impl<T: ?Sized + rand::Rng> WorldRng for T {
    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }

    fn gen_index(&mut self, upper: usize) -> usize {
        rand::Rng::gen_range(self, 0..upper)
    }
}
