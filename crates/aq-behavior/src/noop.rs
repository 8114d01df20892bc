//! A behavior model that never acts.

use aq_core::FishRng;
use aq_entity::Fish;

use crate::{BehaviorModel, Intent, SimContext};

/// A [`BehaviorModel`] that always returns an empty intent list.
///
/// Fish under it coast on their current velocity, which makes integrator and
/// resolver tests independent of steering.
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn decide(&self, _fish: &Fish, _ctx: &SimContext<'_>, _rng: &mut FishRng) -> Vec<Intent> {
        vec![]
    }
}
