//! Fish intents: the changes a fish requests during its decision.

use aq_core::{FoodId, Vec2};

/// An action a fish wants applied this tick.
///
/// Produced by [`BehaviorModel::decide`][crate::BehaviorModel::decide] and
/// consumed, in order, by the apply phase in aq-sim.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Start pursuing `food`.  Only emitted on acquisition, not every tick
    /// of an ongoing pursuit.
    Pursue(FoodId),

    /// The current target no longer resolves; drop it.
    ClearTarget,

    /// Replace the carried wander heading (radians).
    SetWanderAngle(f64),

    /// Desired velocity for this tick.  The integrator blends the fish's
    /// velocity toward it; without a `Steer` the fish coasts.
    Steer(Vec2),
}
