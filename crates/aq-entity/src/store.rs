//! Entity storage: `EntityStore` (fish + food) and `FishRngs` (per-fish RNG).
//!
//! # Two structs
//!
//! The behavior phase needs `&mut FishRng` for the fish being decided and
//! `&EntityStore` for everything it senses.  Keeping the RNGs out of the store
//! lets both borrows coexist:
//!
//! ```ignore
//! let store: &EntityStore = &world.store;
//! for fish in store.fish() {
//!     let rng = world.rngs.get_or_spawn(fish.id());
//!     intents.push((fish.id(), behavior.decide(fish, &ctx, rng)));
//! }
//! ```
//!
//! # Layout
//!
//! Fish and food live in dense `Vec`s with an id → slot index map.  Removal
//! is `swap_remove` plus one index fix-up, so it is O(1) but moves the last
//! element into the hole.  Iteration order is therefore stable between
//! removals only; the tick loop defers every removal to the end of the
//! resolver phase, which keeps the order fixed for the rest of the tick.

use aq_core::{AquariumConfig, Bounds, FishId, FishRng, FoodId, Vec2};
use rustc_hash::FxHashMap;

use crate::{Fish, FishTraits, Food};

// ── FishRngs ──────────────────────────────────────────────────────────────────

/// Per-fish deterministic RNG state, kept beside [`EntityStore`].
pub struct FishRngs {
    global_seed: u64,
    inner:       FxHashMap<FishId, FishRng>,
}

impl FishRngs {
    pub fn new(global_seed: u64) -> Self {
        Self { global_seed, inner: FxHashMap::default() }
    }

    /// Seed (or reseed) the RNG for `fish` and return it.
    pub fn spawn(&mut self, fish: FishId) -> &mut FishRng {
        let rng = FishRng::new(self.global_seed, fish);
        self.inner.entry(fish).insert_entry(rng).into_mut()
    }

    /// The RNG for `fish`, seeding it first if it was never spawned.
    pub fn get_or_spawn(&mut self, fish: FishId) -> &mut FishRng {
        let seed = self.global_seed;
        self.inner.entry(fish).or_insert_with(|| FishRng::new(seed, fish))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── EntityStore ───────────────────────────────────────────────────────────────

/// Owner of every live fish and food particle.
#[derive(Default)]
pub struct EntityStore {
    fish:       Vec<Fish>,
    fish_index: FxHashMap<FishId, usize>,
    food:       Vec<Food>,
    food_index: FxHashMap<FoodId, usize>,
    next_fish:  FishId,
    next_food:  FoodId,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Insertion ─────────────────────────────────────────────────────────

    /// Insert a motionless fish at `position` (clamped into `bounds`).
    ///
    /// The fish's RNG is seeded in `rngs` first, and its size, cruise speed,
    /// hue and initial wander heading are drawn from it.
    pub fn insert_fish(
        &mut self,
        position: Vec2,
        bounds: Bounds,
        rngs: &mut FishRngs,
        config: &AquariumConfig,
    ) -> FishId {
        let id = self.next_fish;
        self.next_fish = id.next();

        let traits = FishTraits::draw(rngs.spawn(id), config);
        let fish = Fish::new(id, bounds.clamp(position), traits);
        tracing::debug!(fish = %id, x = fish.position.x, y = fish.position.y, size = fish.size, "fish inserted");

        self.fish_index.insert(id, self.fish.len());
        self.fish.push(fish);
        id
    }

    /// Insert food at `position` (clamped into `bounds`) with the given
    /// lifetime.
    pub fn insert_food(
        &mut self,
        position: Vec2,
        bounds: Bounds,
        lifetime_ticks: u32,
    ) -> FoodId {
        let id = self.next_food;
        self.next_food = id.next();

        let food = Food::new(id, bounds.clamp(position), lifetime_ticks);
        tracing::debug!(food = %id, x = food.position.x, y = food.position.y, "food inserted");

        self.food_index.insert(id, self.food.len());
        self.food.push(food);
        id
    }

    // ── Removal ───────────────────────────────────────────────────────────

    /// Remove food by id in O(1).  Removing an absent id is a no-op that
    /// returns `None`.
    pub fn remove_food(&mut self, id: FoodId) -> Option<Food> {
        let slot = self.food_index.remove(&id)?;
        let removed = self.food.swap_remove(slot);
        if let Some(moved) = self.food.get(slot) {
            self.food_index.insert(moved.id(), slot);
        }
        Some(removed)
    }

    /// Clear every fish target that points at `food`.  Returns how many were
    /// cleared.
    pub fn clear_targets_of(&mut self, food: FoodId) -> usize {
        let mut cleared = 0;
        for fish in &mut self.fish {
            if fish.target == Some(food) {
                fish.target = None;
                cleared += 1;
            }
        }
        cleared
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn fish_by_id(&self, id: FishId) -> Option<&Fish> {
        self.fish_index.get(&id).map(|&i| &self.fish[i])
    }

    #[inline]
    pub fn fish_by_id_mut(&mut self, id: FishId) -> Option<&mut Fish> {
        let i = *self.fish_index.get(&id)?;
        self.fish.get_mut(i)
    }

    /// Food by id; `None` once the food has been eaten or has expired.
    #[inline]
    pub fn food(&self, id: FoodId) -> Option<&Food> {
        self.food_index.get(&id).map(|&i| &self.food[i])
    }

    #[inline]
    pub fn contains_food(&self, id: FoodId) -> bool {
        self.food_index.contains_key(&id)
    }

    // ── Iteration ─────────────────────────────────────────────────────────

    /// All live fish in store order.
    #[inline]
    pub fn fish(&self) -> &[Fish] {
        &self.fish
    }

    /// Mutable access for the apply and integrate phases.  Ids are private
    /// on [`Fish`], so the index map cannot be invalidated through this.
    #[inline]
    pub fn fish_mut(&mut self) -> &mut [Fish] {
        &mut self.fish
    }

    /// All live food in store order.
    #[inline]
    pub fn foods(&self) -> &[Food] {
        &self.food
    }

    #[inline]
    pub fn foods_mut(&mut self) -> &mut [Food] {
        &mut self.food
    }

    pub fn fish_count(&self) -> usize {
        self.fish.len()
    }

    pub fn food_count(&self) -> usize {
        self.food.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fish.is_empty() && self.food.is_empty()
    }

    // ── Bounds ────────────────────────────────────────────────────────────

    /// Clamp every fish and food position into `bounds`.  Used after the
    /// surface shrinks.
    pub fn clamp_into(&mut self, bounds: Bounds) {
        for fish in &mut self.fish {
            fish.position = bounds.clamp(fish.position);
        }
        for food in &mut self.food {
            food.position = bounds.clamp(food.position);
        }
    }
}
