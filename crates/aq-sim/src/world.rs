//! The `World` aggregate and its tick loop.

use aq_behavior::{BehaviorModel, FishBehavior, Intent, SimContext};
use aq_core::{AquariumConfig, Bounds, FishId, FoodId, Tick, Vec2};
use aq_entity::{EntityStore, FishRngs};
use aq_physics::Integrator;

use crate::audit::{self, Violation};
use crate::resolver::{self, Meal};
use crate::SimObserver;

// ── TickReport ────────────────────────────────────────────────────────────────

/// Summary of one [`World::step`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// The tick that was processed.
    pub tick: Tick,
    /// Targets picked up this tick, in fish order.
    pub acquired: Vec<(FishId, FoodId)>,
    pub meals: Vec<Meal>,
    pub expired: Vec<FoodId>,
    /// Fish clamped back into the tank by the integrator.
    pub clamped: usize,
    /// Violations found (and healed) before and after the tick's work.
    pub violations: Vec<Violation>,
}

// ── World ─────────────────────────────────────────────────────────────────────

/// The aggregate simulation state: the tank rectangle, every fish and food
/// particle, and the tick counter.
///
/// `World<B>` drives a six-phase step:
///
/// 0. **Audit**: heal anything left broken by outside mutation.
/// 1. **Intent**: [`BehaviorModel::decide`] for every fish, read-only.
/// 2. **Apply + integrate**: targets and wander angles are updated, then the
///    [`Integrator`] moves the fish along its `Steer` velocity.
/// 3. **Resolve**: consumption and expiry ([`resolver`]).
/// 4. **Metabolism**: sizes decay toward `min_fish_size`.
/// 5. **Audit**: re-check the invariants the phases above must uphold.
///
/// Create via [`WorldBuilder`][crate::WorldBuilder].
pub struct World<B: BehaviorModel = FishBehavior> {
    pub(crate) config:     AquariumConfig,
    pub(crate) bounds:     Bounds,
    pub(crate) tick:       Tick,
    pub(crate) seed:       u64,
    pub(crate) store:      EntityStore,
    pub(crate) rngs:       FishRngs,
    pub(crate) behavior:   B,
    pub(crate) integrator: Integrator,
}

impl<B: BehaviorModel> World<B> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &AquariumConfig {
        &self.config
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The next tick to be processed.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// The resolved master seed.  Identical seeds give identical runs.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Direct store access.  Anything left inconsistent here is caught and
    /// healed by the audit at the start of the next step.
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert a fish at `position`, clamped into the tank.
    pub fn add_fish(&mut self, position: Vec2) -> FishId {
        self.store.insert_fish(position, self.bounds, &mut self.rngs, &self.config)
    }

    /// Drop food at `position`, clamped into the tank, with the configured
    /// lifetime.
    pub fn add_food(&mut self, position: Vec2) -> FoodId {
        self.add_food_with_lifetime(position, self.config.food_lifetime_ticks)
    }

    pub fn add_food_with_lifetime(&mut self, position: Vec2, lifetime_ticks: u32) -> FoodId {
        self.store.insert_food(position, self.bounds, lifetime_ticks)
    }

    /// Adopt new tank dimensions and pull every entity back inside.
    pub fn resize(&mut self, bounds: Bounds) {
        if bounds == self.bounds {
            return;
        }
        tracing::debug!(
            from_w = self.bounds.width, from_h = self.bounds.height,
            to_w = bounds.width, to_h = bounds.height,
            "tank resized"
        );
        self.bounds = bounds;
        self.store.clamp_into(bounds);
    }

    /// Check and heal the invariants right now, outside a step.
    pub fn audit(&mut self) -> Vec<Violation> {
        let found = audit::inspect(&self.store, self.bounds);
        audit::heal(&mut self.store, self.bounds, &found);
        found
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance the world by one fixed step.
    ///
    /// Never fails: an empty tank is a valid (and cheap) step, and every
    /// inconsistency found along the way is healed and reported through the
    /// returned [`TickReport`] rather than aborting.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> TickReport {
        let now = self.tick;
        observer.on_tick_start(now);
        let mut report = TickReport { tick: now, ..TickReport::default() };

        // ── Phase 0: pre-audit ────────────────────────────────────────────
        report.violations = self.audit();

        // ── Phase 1: intent phase (produce) ───────────────────────────────
        let intents = self.compute_intents(now);

        // ── Phase 2: apply + integrate (consume) ──────────────────────────
        for (fish_id, fish_intents) in intents {
            let Some(fish) = self.store.fish_by_id_mut(fish_id) else { continue };
            let mut desired = None;
            for intent in fish_intents {
                match intent {
                    Intent::Pursue(food) => {
                        fish.target = Some(food);
                        report.acquired.push((fish_id, food));
                        observer.on_target_acquired(now, fish_id, food);
                    }
                    Intent::ClearTarget => fish.target = None,
                    Intent::SetWanderAngle(angle) => fish.wander_angle = angle,
                    Intent::Steer(v) => desired = Some(v),
                }
            }
            if self.integrator.integrate(fish, desired, self.bounds).clamped {
                report.clamped += 1;
            }
        }

        // ── Phase 3: resolve consumption and expiry ───────────────────────
        let resolution = resolver::resolve(&mut self.store, &self.config);
        for meal in &resolution.meals {
            observer.on_food_eaten(now, meal);
        }
        for &food in &resolution.expired {
            observer.on_food_expired(now, food);
        }
        report.meals = resolution.meals;
        report.expired = resolution.expired;

        // ── Phase 4: metabolism ───────────────────────────────────────────
        let (decay, floor) = (self.config.size_decay_per_tick, self.config.min_fish_size);
        for fish in self.store.fish_mut() {
            if fish.size > floor {
                fish.size = (fish.size - decay).max(floor);
            }
        }

        // ── Phase 5: post-audit ───────────────────────────────────────────
        report.violations.extend(self.audit());
        for violation in &report.violations {
            tracing::warn!(tick = %now, %violation, "invariant violation healed");
            observer.on_violation(now, violation);
        }

        tracing::trace!(
            tick = %now,
            fish = self.store.fish_count(),
            food = self.store.food_count(),
            eaten = report.meals.len(),
            expired = report.expired.len(),
            "tick done"
        );

        self.tick = now.next();
        observer.on_tick_end(&report);
        report
    }

    /// Run `n` steps, discarding the reports.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Decide for every fish in store order.
    fn compute_intents(&mut self, now: Tick) -> Vec<(FishId, Vec<Intent>)> {
        let ctx = SimContext::new(now, self.bounds, &self.config, &self.store);
        let mut out = Vec::with_capacity(self.store.fish_count());
        for fish in self.store.fish() {
            let rng = self.rngs.get_or_spawn(fish.id());
            out.push((fish.id(), self.behavior.decide(fish, &ctx, rng)));
        }
        out
    }
}
