//! Fluent builder for constructing a [`World`].

use aq_behavior::{BehaviorModel, FishBehavior};
use aq_core::{AquariumConfig, Bounds, EntropySource, OsEntropy, SimRng, Tick, Vec2};
use aq_entity::{EntityStore, FishRngs};
use aq_physics::Integrator;

use crate::{SimError, SimResult, World};

/// Largest initial school a builder accepts.
pub const MAX_INITIAL_FISH: usize = 10_000;

/// Offset of the placement stream derived from the master seed.
const PLACEMENT_STREAM: u64 = 1;

/// Fluent builder for [`World<B>`].
///
/// | Method          | Default                               |
/// |-----------------|---------------------------------------|
/// | `.behavior(b)`  | [`FishBehavior`]                      |
///
/// # Example
///
/// ```rust,ignore
/// let mut world = WorldBuilder::new(config, bounds)
///     .behavior(NoopBehavior)
///     .build_with_entropy(&mut FixedEntropy(7))?;
/// world.step(&mut NoopObserver);
/// ```
pub struct WorldBuilder<B: BehaviorModel = FishBehavior> {
    config:   AquariumConfig,
    bounds:   Bounds,
    behavior: B,
}

impl WorldBuilder<FishBehavior> {
    /// Builder with the default fish behavior.
    pub fn new(config: AquariumConfig, bounds: Bounds) -> Self {
        Self { config, bounds, behavior: FishBehavior }
    }
}

impl<B: BehaviorModel> WorldBuilder<B> {
    /// Swap in a different behavior model.
    pub fn behavior<B2: BehaviorModel>(self, behavior: B2) -> WorldBuilder<B2> {
        WorldBuilder { config: self.config, bounds: self.bounds, behavior }
    }

    /// Build, drawing the master seed from the OS when the config has none.
    pub fn build(self) -> SimResult<World<B>> {
        self.build_with_entropy(&mut OsEntropy)
    }

    /// Validate the config, resolve the seed and spawn the initial school.
    pub fn build_with_entropy(self, entropy: &mut dyn EntropySource) -> SimResult<World<B>> {
        self.config.validate()?;
        if self.config.initial_fish > MAX_INITIAL_FISH {
            return Err(SimError::SchoolTooLarge {
                requested: self.config.initial_fish,
                limit:     MAX_INITIAL_FISH,
            });
        }

        let seed = self.config.resolve_seed(entropy);
        let mut rngs = FishRngs::new(seed);
        let mut store = EntityStore::new();

        // ── Initial school ────────────────────────────────────────────────
        // Above the sand only.
        let mut placement = SimRng::new(seed).child(PLACEMENT_STREAM);
        let floor_y = self.config.floor_y(self.bounds);
        for _ in 0..self.config.initial_fish {
            let position = Vec2::new(
                placement.gen_range(0.0..=self.bounds.width),
                placement.gen_range(0.0..=floor_y),
            );
            store.insert_fish(position, self.bounds, &mut rngs, &self.config);
        }

        tracing::debug!(
            seed,
            width = self.bounds.width,
            height = self.bounds.height,
            fish = store.fish_count(),
            "world built"
        );

        Ok(World {
            integrator: Integrator::new(&self.config),
            config:     self.config,
            bounds:     self.bounds,
            tick:       Tick::ZERO,
            seed,
            store,
            rngs,
            behavior:   self.behavior,
        })
    }
}
