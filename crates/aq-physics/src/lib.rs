//! `aq-physics` — moves fish.
//!
//! # Crate layout
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`integrator`] | `Integrator`, `Motion`                                |
//!
//! # Movement model (fixed step)
//!
//! Each tick, for every fish:
//!
//! 1. **Steer**: velocity moves `turn_rate` of the way toward the desired
//!    velocity from the behavior phase (or is kept as-is without one).
//! 2. **Cap**: speed is clamped to the fish's cruise cap, plus
//!    `pursuit_boost` while it has a target.
//! 3. **Move**: `position += velocity * time_step`.  The step is a
//!    configured constant, never a wall-clock delta.
//! 4. **Contain**: position is clamped into the tank; the velocity component
//!    that pointed through a wall is zeroed.
//! 5. **Face**: heading follows velocity unless the fish is almost still.

pub mod integrator;


pub use integrator::{Integrator, Motion};
