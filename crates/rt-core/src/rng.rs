//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! The organization model owns exactly one `SimRng` and threads it by `&mut`
//! through every stochastic draw: attribute initialization, satisfaction
//! noise, attrition rolls, and the per-step activation shuffle.  Because the
//! simulation is single-threaded and the population is iterated in a
//! seed-determined order, the same seed always reproduces the same run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Simulation-level RNG.  Seed it once per run with [`SimRng::new`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// Uniform draw between `low` and `high`.
    ///
    /// Returns `low` when the range is degenerate instead of panicking.
    #[inline]
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.0.gen_range(low..high)
    }

    /// Gaussian draw with the given mean and standard deviation.
    ///
    /// Scales a standard-normal sample, so it is total for any finite
    /// `std_dev` (a zero deviation yields `mean`).
    #[inline]
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let z: f64 = self.0.sample(StandardNormal);
        mean + std_dev * z
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}

impl std::fmt::Debug for SimRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SimRng")
    }
}
