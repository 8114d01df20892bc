//! `aq-behavior` — per-tick fish decisions.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`intent`]  | `Intent` enum (`Pursue`, `ClearTarget`, `SetWanderAngle`, `Steer`) |
//! | [`context`] | `SimContext<'a>`: read-only tick snapshot shared by all fish  |
//! | [`model`]   | `BehaviorModel` trait                                         |
//! | [`sense`]   | nearest-food scan, boundary push                              |
//! | [`fish`]    | `FishBehavior`: seek, wander, avoid walls                     |
//! | [`noop`]    | `NoopBehavior`: never produces intents                        |
//!
//! # Two phases
//!
//! 1. **Intent phase**: for every fish, call `BehaviorModel::decide`.  All
//!    reads go through `&SimContext`; the only mutable state is the fish's
//!    own RNG.
//!
//! 2. **Apply phase** (aq-sim): consume the collected intents, update
//!    targets and wander angles, and hand each `Steer` velocity to the
//!    integrator.
//!
//! Behavior never writes positions, so it can be tested against a frozen
//! store without running physics.

pub mod context;
pub mod fish;
pub mod intent;
pub mod model;
pub mod noop;
pub mod sense;

#[cfg(test)]
mod tests;

pub use context::SimContext;
pub use fish::FishBehavior;
pub use intent::Intent;
pub use model::BehaviorModel;
pub use noop::NoopBehavior;
