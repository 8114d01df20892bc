//! `aq-entity` — fish and food storage for the aquarium simulation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`fish`]    | `Fish`, `FishTraits` (per-fish size/speed/hue draw)        |
//! | [`food`]    | `Food`                                                     |
//! | [`store`]   | `EntityStore` (dense vecs + id index), `FishRngs`          |
//!
//! # Identity model
//!
//! Ids come from per-kind monotonically increasing counters and are never
//! recycled.  A fish's `target` is a plain [`FoodId`][aq_core::FoodId]
//! looked up through [`EntityStore::food`]; a lookup on a removed id simply
//! returns `None`, which is how the behavior phase notices a target is gone.

pub mod fish;
pub mod food;
pub mod store;


pub use fish::{Fish, FishTraits};
pub use food::Food;
pub use store::{EntityStore, FishRngs};
