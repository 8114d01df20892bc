//! Tunable simulation parameters.
//!
//! Every steering constant, radius and lifetime lives here rather than in the
//! code that uses it, so tests can pin exact values and the host page can
//! override any subset through a JS options object (`serde` feature).

use crate::{AqError, AqResult, Bounds, EntropySource};

/// Sand baseline as a fraction of the tank height.
pub const DEFAULT_FLOOR_LEVEL: f64 = 0.9;

/// Top-level aquarium configuration.
///
/// All speeds and rates are per tick; all distances are surface pixels.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AquariumConfig {
    /// Master RNG seed.  `None` draws one from an [`EntropySource`] at build
    /// time; the same seed always produces identical runs.
    pub seed: Option<u64>,

    /// Fixed integration step applied to velocity each tick.
    pub time_step: f64,

    /// Fish spawned at random positions when the world is built.
    pub initial_fish: usize,

    /// `(min, max)` size of a newly inserted fish.
    pub fish_size_range: (f64, f64),

    /// Size never decays below this floor.
    pub min_fish_size: f64,

    /// Size lost every tick.
    pub size_decay_per_tick: f64,

    /// Size gained per eaten food.
    pub growth_per_food: f64,

    /// `(min, max)` per-fish cruise speed cap.
    pub cruise_speed_range: (f64, f64),

    /// Extra speed allowed on top of the cruise cap while pursuing food.
    pub pursuit_boost: f64,

    /// Fraction of the gap between current and desired velocity closed each
    /// tick.  Must lie in `(0, 1]`; `1` snaps instantly.
    pub turn_rate: f64,

    /// Food farther than this is invisible to a fish looking for a target.
    pub sensing_radius: f64,

    /// A pursuing fish eats its target once within this distance.
    pub consumption_radius: f64,

    /// Largest wander-angle change per tick, in radians.
    pub wander_jitter: f64,

    /// Fraction of the cruise cap used while wandering.
    pub wander_speed_factor: f64,

    /// Distance from an edge at which boundary avoidance starts.
    pub boundary_margin: f64,

    /// Strength multiplier for boundary avoidance.
    pub boundary_gain: f64,

    /// Sand baseline as a fraction of the tank height, in `(0, 1]`.  Fish
    /// treat it as the bottom wall and the seafloor is drawn around it.
    pub floor_level: f64,

    /// Ticks before uneaten food expires.
    pub food_lifetime_ticks: u32,
}

impl Default for AquariumConfig {
    fn default() -> Self {
        Self {
            seed:                None,
            time_step:           1.0,
            initial_fish:        15,
            fish_size_range:     (10.0, 18.0),
            min_fish_size:       4.0,
            size_decay_per_tick: 0.0005,
            growth_per_food:     1.5,
            cruise_speed_range:  (0.3, 0.6),
            pursuit_boost:       0.5,
            turn_rate:           0.08,
            sensing_radius:      400.0,
            consumption_radius:  8.0,
            wander_jitter:       0.3,
            wander_speed_factor: 0.6,
            boundary_margin:     60.0,
            boundary_gain:       1.0,
            floor_level:         DEFAULT_FLOOR_LEVEL,
            food_lifetime_ticks: 3_600,
        }
    }
}

impl AquariumConfig {
    /// An empty tank with a pinned seed.  Convenient starting point for tests
    /// and headless runs that place every entity explicitly.
    pub fn seeded_empty(seed: u64) -> Self {
        Self { seed: Some(seed), initial_fish: 0, ..Self::default() }
    }

    /// Reject values that would make steering or integration misbehave.
    pub fn validate(&self) -> AqResult<()> {
        let finite = [
            ("time_step", self.time_step),
            ("fish_size_range.0", self.fish_size_range.0),
            ("fish_size_range.1", self.fish_size_range.1),
            ("min_fish_size", self.min_fish_size),
            ("size_decay_per_tick", self.size_decay_per_tick),
            ("growth_per_food", self.growth_per_food),
            ("cruise_speed_range.0", self.cruise_speed_range.0),
            ("cruise_speed_range.1", self.cruise_speed_range.1),
            ("pursuit_boost", self.pursuit_boost),
            ("turn_rate", self.turn_rate),
            ("sensing_radius", self.sensing_radius),
            ("consumption_radius", self.consumption_radius),
            ("wander_jitter", self.wander_jitter),
            ("wander_speed_factor", self.wander_speed_factor),
            ("boundary_margin", self.boundary_margin),
            ("boundary_gain", self.boundary_gain),
        ];
        for (name, value) in finite {
            if !value.is_finite() || value < 0.0 {
                return Err(AqError::Config(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        if self.time_step <= 0.0 {
            return Err(AqError::Config("time_step must be positive".into()));
        }
        if !(self.turn_rate > 0.0 && self.turn_rate <= 1.0) {
            return Err(AqError::Config(format!(
                "turn_rate must lie in (0, 1], got {}",
                self.turn_rate
            )));
        }
        if self.fish_size_range.0 > self.fish_size_range.1 {
            return Err(AqError::Config("fish_size_range is inverted".into()));
        }
        if self.cruise_speed_range.0 > self.cruise_speed_range.1 {
            return Err(AqError::Config("cruise_speed_range is inverted".into()));
        }
        if self.cruise_speed_range.1 <= 0.0 {
            return Err(AqError::Config("cruise_speed_range must allow movement".into()));
        }
        if self.consumption_radius <= 0.0 || self.sensing_radius <= 0.0 {
            return Err(AqError::Config(
                "sensing_radius and consumption_radius must be positive".into(),
            ));
        }
        if !(self.floor_level > 0.0 && self.floor_level <= 1.0) {
            return Err(AqError::Config(format!(
                "floor_level must lie in (0, 1], got {}",
                self.floor_level
            )));
        }
        if self.growth_per_food <= 0.0 {
            return Err(AqError::Config("growth_per_food must be positive".into()));
        }
        Ok(())
    }

    /// The configured seed, or a fresh one from `entropy`.
    pub fn resolve_seed(&self, entropy: &mut dyn EntropySource) -> u64 {
        self.seed.unwrap_or_else(|| entropy.master_seed())
    }

    /// The sand baseline in `bounds`.
    #[inline]
    pub fn floor_y(&self, bounds: Bounds) -> f64 {
        bounds.height * self.floor_level
    }

    /// Hard speed ceiling for any fish, pursuit boost included.
    #[inline]
    pub fn top_speed(&self) -> f64 {
        self.cruise_speed_range.1 + self.pursuit_boost
    }
}
