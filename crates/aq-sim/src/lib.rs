//! `aq-sim` — the aquarium world and its tick loop.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`world`]    | `World<B>`, `TickReport`: the six-phase step               |
//! | [`builder`]  | `WorldBuilder`: validation, seeding, initial school        |
//! | [`resolver`] | food consumption and expiry (`Resolution`, `Meal`)         |
//! | [`audit`]    | `Violation`, read-only `inspect` and self-healing `heal`   |
//! | [`observer`] | `SimObserver` trait + `NoopObserver`                       |
//! | [`error`]    | `SimError`, `SimResult<T>`                                 |
//!
//! # Quick start
//!
//! ```rust,ignore
//! use aq_core::{AquariumConfig, Bounds, Vec2};
//! use aq_sim::{NoopObserver, WorldBuilder};
//!
//! let bounds = Bounds::new(800.0, 600.0).unwrap();
//! let mut world = WorldBuilder::new(AquariumConfig::seeded_empty(1), bounds).build()?;
//! world.add_fish(Vec2::new(10.0, 10.0));
//! world.add_food(Vec2::new(12.0, 10.0));
//! let report = world.step(&mut NoopObserver);
//! ```

pub mod audit;
pub mod builder;
pub mod error;
pub mod observer;
pub mod resolver;
pub mod world;

#[cfg(test)]
mod tests;

pub use audit::Violation;
pub use builder::WorldBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use resolver::{Meal, Resolution};
pub use world::{TickReport, World};
