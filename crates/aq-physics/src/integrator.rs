//! The fixed-step integrator.

use aq_core::{AquariumConfig, Bounds, Vec2};
use aq_entity::Fish;

/// Below this speed the heading is left alone.
const HEADING_MIN_SPEED: f64 = 1e-6;

/// What happened to one fish during [`Integrator::integrate`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Motion {
    /// The position had to be clamped back into the tank.
    pub clamped: bool,
    /// The desired velocity was non-finite and ignored.
    pub rejected_steer: bool,
}

/// Moves fish by one fixed step.
///
/// Holds a copy of the three tunables it needs so the tick loop can hold
/// `&mut EntityStore` and an `Integrator` at once.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Integrator {
    pub time_step:     f64,
    pub turn_rate:     f64,
    pub pursuit_boost: f64,
}

impl Integrator {
    pub fn new(config: &AquariumConfig) -> Self {
        Self {
            time_step:     config.time_step,
            turn_rate:     config.turn_rate,
            pursuit_boost: config.pursuit_boost,
        }
    }

    /// Blend `fish.velocity` toward `desired` and apply the speed cap.
    /// Steering toward the current velocity only applies the cap.
    pub fn steer(&self, fish: &mut Fish, desired: Vec2) {
        let blended = fish.velocity.lerp(desired, self.turn_rate);
        fish.velocity = blended.clamp_length(fish.speed_limit(self.pursuit_boost));
    }

    /// Run one full step for `fish`: steer (when `desired` is given), cap,
    /// move, contain, face.
    pub fn integrate(&self, fish: &mut Fish, desired: Option<Vec2>, bounds: Bounds) -> Motion {
        let mut motion = Motion::default();

        let target = match desired {
            Some(v) if v.is_finite() => v,
            Some(_) => {
                motion.rejected_steer = true;
                fish.velocity
            }
            None => fish.velocity,
        };
        self.steer(fish, target);
        if !fish.velocity.is_finite() {
            fish.velocity = Vec2::ZERO;
        }

        let moved = fish.position + fish.velocity * self.time_step;
        let contained = bounds.clamp(moved);
        if contained != moved {
            motion.clamped = true;
            if contained.x != moved.x {
                fish.velocity.x = 0.0;
            }
            if contained.y != moved.y {
                fish.velocity.y = 0.0;
            }
        }
        fish.position = contained;

        if fish.velocity.length() > HEADING_MIN_SPEED {
            if let Some(angle) = fish.velocity.angle() {
                fish.heading = angle;
            }
        }
        motion
    }
}
