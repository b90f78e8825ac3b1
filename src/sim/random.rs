//! Seeded random helpers
//!
//! Every random draw in the simulation goes through a [`GameRng`] owned by
//! the game state, so a seed reproduces a whole run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

pub type GameRng = Pcg32;

pub fn seeded(seed: u64) -> GameRng {
    Pcg32::seed_from_u64(seed)
}

/// Uniform float in `[min, max)`. Returns `min` when the range is empty.
pub fn random(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    if min >= max {
        return min;
    }
    rng.random_range(min..max)
}

/// True with probability `p`
pub fn chance(rng: &mut impl Rng, p: f32) -> bool {
    rng.random::<f32>() < p
}
