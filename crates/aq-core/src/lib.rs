//! `aq-core` — foundational types for the aquarium simulation.
//!
//! This crate is a dependency of every other `aq-*` crate.  It intentionally
//! has no `aq-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `FishId`, `FoodId`                                    |
//! | [`geo`]         | `Vec2`, `Bounds` (the tank rectangle)                 |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `FishRng` (per-fish), `SimRng` (global), `EntropySource` |
//! | [`config`]      | `AquariumConfig` — every steering/lifetime tunable    |
//! | [`error`]       | `AqError`, `AqResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by the web facade's JS options object.            |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AquariumConfig, DEFAULT_FLOOR_LEVEL};
pub use error::{AqError, AqResult};
pub use geo::{Bounds, Vec2};
pub use ids::{FishId, FoodId};
pub use rng::{EntropySource, FishRng, FixedEntropy, OsEntropy, SimRng};
pub use time::Tick;
