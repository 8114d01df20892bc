//! `aquarium` — the embeddable aquarium facade.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`facade`] | `Aquarium<H>`: lifecycle, surface binding, tick = step + draw |
//! | [`shared`] | `SharedAquarium<H>`: re-entrancy-safe handle, input queue     |
//! | `web`      | (wasm32 only) canvas backend and the exported JS class       |
//!
//! The facade is generic over a [`SurfaceHost`] so it runs natively against
//! [`aq_render::RecordingSurface`] in tests and the headless demo, and in the
//! browser against an HTML canvas.

pub mod facade;
pub mod shared;

#[cfg(target_arch = "wasm32")]
pub mod web;


pub use facade::{Aquarium, Binding, SurfaceHost, TickSummary};
pub use shared::{Applied, Command, SharedAquarium, Submitted};
