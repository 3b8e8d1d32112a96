use super::flash::Flash;
use super::hue::HueCursor;
use super::spark::Spark;
use crate::random::{chance, range, range_int};
use fastrand::Rng;
use std::f32::consts::TAU;

const REDUCED_SPARKS: usize = 36;
const REDUCED_ALPHA: f32 = 0.9;
const PRIMARY_ALPHA: f32 = 1.0;
const RING_ALPHA: f32 = 0.85;
const RING_CHANCE: f32 = 0.5;

/// Shape of one burst, rolled before any spark is spawned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Burst {
    /// Fixed small burst, no ring.
    Reduced,
    Full {
        sparks: usize,
        speed: f32,
        ring: Option<usize>,
    },
}

impl Burst {
    pub fn roll(rng: &mut Rng, reduced_motion: bool) -> Self {
        if reduced_motion {
            return Burst::Reduced;
        }
        let sparks = range_int(rng, 90, 130);
        let speed = range(rng, 3.0, 4.8);
        let ring = chance(rng, RING_CHANCE).then(|| range_int(rng, 28, 44));
        Burst::Full { sparks, speed, ring }
    }
}

/// What one detonation produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstReport {
    pub hue: f32,
    pub sparks: usize,
    pub ring: usize,
}

/// Spawns one flash and the burst's sparks at `(x, y)`.
///
/// The burst is colored with the cursor's current hue; the cursor is then
/// kicked forward by 18-36 degrees so consecutive bursts differ.
pub fn explode(
    x: f32,
    y: f32,
    burst: Burst,
    hue: &mut HueCursor,
    rng: &mut Rng,
    sparks: &mut Vec<Spark>,
    flashes: &mut Vec<Flash>,
) -> BurstReport {
    let base = hue.degrees();
    hue.advance(range(rng, 18.0, 36.0));
    flashes.push(Flash::new(x, y, base));

    match burst {
        Burst::Reduced => {
            sparks.reserve(REDUCED_SPARKS);
            for _ in 0..REDUCED_SPARKS {
                let speed = range(rng, 2.3, 3.2);
                sparks.push(Spark::new(rng, x, y, base, speed, REDUCED_ALPHA));
            }
            BurstReport { hue: base, sparks: REDUCED_SPARKS, ring: 0 }
        }
        Burst::Full { sparks: count, speed, ring } => {
            sparks.reserve(count + ring.unwrap_or(0));
            for _ in 0..count {
                sparks.push(Spark::new(rng, x, y, base, speed, PRIMARY_ALPHA));
            }

            let ring_count = ring.unwrap_or(0);
            let complement = base + 180.0;
            for i in 0..ring_count {
                let angle = i as f32 / ring_count as f32 * TAU;
                let speed = range(rng, 2.0, 2.6);
                let spark = Spark::new(rng, x, y, complement, speed, RING_ALPHA).aimed(angle, speed);
                sparks.push(spark);
            }

            BurstReport { hue: base, sparks: count, ring: ring_count }
        }
    }
}
