//! `aq-render` — paints the tank onto any 2D immediate-mode surface.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`color`]     | `Color`, `Paint` (solid or linear gradient)               |
//! | [`path`]      | `Path` builder, `PathOp`                                  |
//! | [`surface`]   | `Surface` trait: the drawing backend seam                 |
//! | [`recording`] | `RecordingSurface`: in-memory backend with fault injection |
//! | [`scenery`]   | `Scenery`: god rays, bubbles, crabs, seafloor             |
//! | [`castle`]    | `Castle`: seeded cobblestone castle, bubble sources       |
//! | [`renderer`]  | `Renderer`, `FrameReport`, `Skipped`                      |
//! | [`error`]     | `RenderError`, `RenderResult<T>`                          |
//!
//! # Paint order
//!
//! Background gradient, god rays, castle, seafloor, bubbles, crabs, food,
//! fish.  Every
//! layer and every entity is drawn independently: a failure is logged,
//! recorded in the [`FrameReport`] and skipped, and the rest of the frame is
//! still painted.
//!
//! The renderer only reads the entity store.  Its own animation state
//! (scenery) advances once per frame from a dedicated seeded RNG.

pub mod castle;
pub mod color;
pub mod error;
pub mod path;
pub mod recording;
pub mod renderer;
pub mod scenery;
pub mod surface;


pub use color::{Color, Paint};
pub use error::{RenderError, RenderResult};
pub use path::{Path, PathOp};
pub use recording::{DrawOp, RecordingSurface};
pub use renderer::{EntityRef, FrameReport, Renderer, Skipped};
pub use castle::{Castle, CastlePlacement};
pub use scenery::{Crab, CrabGait, Scenery};
pub use surface::Surface;
