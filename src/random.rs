//! Small sampling helpers over an explicit `fastrand::Rng`.
//!
//! Every random draw in the show goes through a generator owned by the
//! caller, so a seeded run replays exactly.

use fastrand::Rng;

/// Uniform float in `[min, max)`.
pub fn range(rng: &mut Rng, min: f32, max: f32) -> f32 {
    min + rng.f32() * (max - min)
}

/// Uniform integer in `[min, max]`, both ends inclusive.
pub fn range_int(rng: &mut Rng, min: usize, max: usize) -> usize {
    rng.usize(min..=max)
}

/// `true` with probability `p`.
pub fn chance(rng: &mut Rng, p: f32) -> bool {
    rng.f32() < p
}

pub fn dist(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    (x2 - x1).hypot(y2 - y1)
}
