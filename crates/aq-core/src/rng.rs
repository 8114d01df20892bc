//! Deterministic per-fish and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each fish gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (fish_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive fish ids uniformly across the seed space.
//! This means:
//!
//! - Fish never share RNG state, so one fish's wander draws cannot shift
//!   another's.
//! - Adding a fish mid-run does not disturb the streams of existing fish,
//!   so runs stay reproducible while the user clicks new fish in.
//!
//! The only non-deterministic input in the whole crate graph is the master
//! seed itself when none is configured.  That draw goes through the
//! [`EntropySource`] trait so tests can substitute a fixed value.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::FishId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── EntropySource ─────────────────────────────────────────────────────────────

/// Supplier of the master seed when the configuration does not pin one.
pub trait EntropySource {
    fn master_seed(&mut self) -> u64;
}

/// Draws the master seed from the operating system / browser crypto RNG.
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn master_seed(&mut self) -> u64 {
        rand::random()
    }
}

/// Always yields the wrapped value.
pub struct FixedEntropy(pub u64);

impl EntropySource for FixedEntropy {
    fn master_seed(&mut self) -> u64 {
        self.0
    }
}

// ── FishRng ───────────────────────────────────────────────────────────────────

/// Per-fish deterministic RNG.
///
/// Created when a fish is inserted and stored in a parallel map alongside the
/// store, so the behavior phase can hold `&mut FishRng` and `&EntityStore` at
/// the same time.
pub struct FishRng(SmallRng);

impl FishRng {
    /// Seed deterministically from the run's global seed and a fish id.
    pub fn new(global_seed: u64, fish: FishId) -> Self {
        let seed = global_seed ^ u64::from(fish).wrapping_mul(MIXING_CONSTANT);
        FishRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform sample in `[-bound, bound]`; zero when `bound` is not positive.
    #[inline]
    pub fn symmetric(&mut self, bound: f64) -> f64 {
        if bound > 0.0 { self.0.gen_range(-bound..=bound) } else { 0.0 }
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (initial school placement,
/// scenery animation).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Split off an independent stream.  School placement, scenery and the
    /// demo feeder each take one, keyed by `offset`.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p`, which must lie in `[0, 1]`.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p)
    }
}
