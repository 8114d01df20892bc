//! Invariant audit.
//!
//! The tick loop never lets these conditions arise on its own, but the store
//! is reachable through [`World::store_mut`][crate::World::store_mut], and a
//! bad float can always slip in.  A violation is a value, not an error: the
//! loop heals it, reports it to the observer, logs a warning and keeps
//! going.

use std::fmt;

use aq_core::{Bounds, FishId, FoodId, Vec2};
use aq_entity::EntityStore;

/// A broken world invariant.
#[derive(Clone, Debug, PartialEq)]
pub enum Violation {
    /// A fish's target names food that is no longer in the store.
    DanglingTarget { fish: FishId, food: FoodId },

    /// Size is negative or NaN.
    BadSize { fish: FishId, size: f64 },

    /// Position is outside the tank or non-finite.
    OutOfBounds { fish: FishId, position: Vec2 },

    /// Velocity has a non-finite component.
    BadVelocity { fish: FishId, velocity: Vec2 },
}

impl Violation {
    pub fn fish(&self) -> FishId {
        match *self {
            Violation::DanglingTarget { fish, .. }
            | Violation::BadSize { fish, .. }
            | Violation::OutOfBounds { fish, .. }
            | Violation::BadVelocity { fish, .. } => fish,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DanglingTarget { fish, food } => {
                write!(f, "{fish} targets missing {food}")
            }
            Violation::BadSize { fish, size } => write!(f, "{fish} has size {size}"),
            Violation::OutOfBounds { fish, position } => {
                write!(f, "{fish} is outside the tank at {position}")
            }
            Violation::BadVelocity { fish, velocity } => {
                write!(f, "{fish} has velocity {velocity}")
            }
        }
    }
}

/// Every violation currently present, in fish order.  Read-only.
pub fn inspect(store: &EntityStore, bounds: Bounds) -> Vec<Violation> {
    let mut found = Vec::new();
    for fish in store.fish() {
        let id = fish.id();
        if let Some(food) = fish.target {
            if !store.contains_food(food) {
                found.push(Violation::DanglingTarget { fish: id, food });
            }
        }
        if fish.size.is_nan() || fish.size < 0.0 {
            found.push(Violation::BadSize { fish: id, size: fish.size });
        }
        if !fish.position.is_finite() || !bounds.contains(fish.position) {
            found.push(Violation::OutOfBounds { fish: id, position: fish.position });
        }
        if !fish.velocity.is_finite() {
            found.push(Violation::BadVelocity { fish: id, velocity: fish.velocity });
        }
    }
    found
}

/// Repair each violation in place.
///
/// Dangling targets are dropped, bad sizes reset to zero, positions clamped
/// into the tank and bad velocities zeroed.
pub fn heal(store: &mut EntityStore, bounds: Bounds, violations: &[Violation]) {
    for violation in violations {
        let Some(fish) = store.fish_by_id_mut(violation.fish()) else {
            continue;
        };
        match violation {
            Violation::DanglingTarget { food, .. } => {
                if fish.target == Some(*food) {
                    fish.target = None;
                }
            }
            Violation::BadSize { .. } => fish.size = 0.0,
            Violation::OutOfBounds { .. } => fish.position = bounds.clamp(fish.position),
            Violation::BadVelocity { .. } => fish.velocity = Vec2::ZERO,
        }
    }
}
