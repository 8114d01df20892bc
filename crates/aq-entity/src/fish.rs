//! The `Fish` entity.

use aq_core::{AquariumConfig, FishId, FishRng, FoodId, Vec2};

/// Per-fish constants drawn once at insertion from the fish's own RNG.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FishTraits {
    /// Starting size.
    pub size: f64,
    /// Cruise speed cap.
    pub max_speed: f64,
    /// Body colour hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Initial wander heading in radians.
    pub wander_angle: f64,
}

impl FishTraits {
    /// Draw traits within the configured ranges.
    pub fn draw(rng: &mut FishRng, config: &AquariumConfig) -> Self {
        let (size_lo, size_hi) = config.fish_size_range;
        let (speed_lo, speed_hi) = config.cruise_speed_range;
        Self {
            size:         rng.gen_range(size_lo..=size_hi),
            max_speed:    rng.gen_range(speed_lo..=speed_hi),
            hue:          rng.gen_range(0.0..360.0),
            wander_angle: rng.gen_range(0.0..std::f64::consts::TAU),
        }
    }
}

/// A fish swimming in the tank.
///
/// `id` is private so the store's id → slot index can never be invalidated by
/// a caller; every other field is plain data mutated by the tick phases.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fish {
    id: FishId,

    pub position: Vec2,

    pub velocity: Vec2,

    /// Facing direction in radians.  Follows `velocity`, but keeps its last
    /// value while the fish is (nearly) stationary so a stopped fish does not
    /// snap to face +x.
    pub heading: f64,

    /// Body size; also the fish's energy reserve.  Never negative.
    pub size: f64,

    /// Cruise speed cap (pursuit adds a configured boost on top).
    pub max_speed: f64,

    /// Body colour hue in degrees.
    pub hue: f64,

    /// Wander heading carried between ticks so wandering stays smooth.
    pub wander_angle: f64,

    /// Food currently pursued.  Non-owning: resolve through the store.
    pub target: Option<FoodId>,
}

impl Fish {
    /// A motionless fish at `position` with the given traits.
    pub fn new(id: FishId, position: Vec2, traits: FishTraits) -> Self {
        Self {
            id,
            position,
            velocity:     Vec2::ZERO,
            heading:      traits.wander_angle,
            size:         traits.size,
            max_speed:    traits.max_speed,
            hue:          traits.hue,
            wander_angle: traits.wander_angle,
            target:       None,
        }
    }

    #[inline]
    pub fn id(&self) -> FishId {
        self.id
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Speed cap for this tick: cruise cap, plus `boost` while pursuing.
    #[inline]
    pub fn speed_limit(&self, boost: f64) -> f64 {
        if self.target.is_some() { self.max_speed + boost } else { self.max_speed }
    }
}
