//! The `BehaviorModel` trait.

use aq_core::FishRng;
use aq_entity::Fish;

use crate::{Intent, SimContext};

/// Pluggable fish behavior.
///
/// Implementations read the world through `ctx` and draw randomness only from
/// the fish's own `rng`, so decisions stay deterministic for a fixed seed no
/// matter how many fish are added later.
///
/// ```rust,ignore
/// struct Drift;
///
/// impl BehaviorModel for Drift {
///     fn decide(&self, _fish: &Fish, _ctx: &SimContext<'_>, rng: &mut FishRng) -> Vec<Intent> {
///         vec![Intent::Steer(Vec2::new(rng.symmetric(0.1), 0.0))]
///     }
/// }
/// ```
pub trait BehaviorModel: 'static {
    /// Called once per fish per tick.  An empty `Vec` leaves the fish
    /// coasting with its current target and velocity.
    fn decide(&self, fish: &Fish, ctx: &SimContext<'_>, rng: &mut FishRng) -> Vec<Intent>;
}
