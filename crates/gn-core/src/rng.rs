//! Deterministic RNG for layout generation.
//!
//! Random grids must be reproducible: the same seed always yields the same
//! obstacle pattern, so a failing randomized test can be replayed by seed
//! alone.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG used by random layout generators.  Not shared across threads.
pub struct LayoutRng(SmallRng);

impl LayoutRng {
    pub fn new(seed: u64) -> Self {
        LayoutRng(SmallRng::seed_from_u64(seed))
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
