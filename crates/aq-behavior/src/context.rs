//! Read-only simulation state passed to every behavior call.

use aq_core::{AquariumConfig, Bounds, Tick};
use aq_entity::EntityStore;

/// A read-only snapshot of the world for one tick's intent phase.
///
/// The tick loop builds it once and shares it across every fish.  No mutable
/// access to the store exists while a `SimContext` is live.
pub struct SimContext<'a> {
    pub tick:   Tick,
    pub bounds: Bounds,
    pub config: &'a AquariumConfig,
    pub store:  &'a EntityStore,
}

impl<'a> SimContext<'a> {
    #[inline]
    pub fn new(
        tick:   Tick,
        bounds: Bounds,
        config: &'a AquariumConfig,
        store:  &'a EntityStore,
    ) -> Self {
        Self { tick, bounds, config, store }
    }
}
