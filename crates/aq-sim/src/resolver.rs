//! Food consumption and expiry.
//!
//! Resolution runs in two passes so no removal happens while the store is
//! being scanned:
//!
//! 1. **Scan**: each pursuing fish within `consumption_radius` of its live
//!    target claims it.  Fish are visited in store order and the first
//!    claimant wins; later claimants of the same food keep nothing.  Every
//!    unclaimed food then ages one tick.  Claimed food does not age, so food
//!    reached on its last tick is eaten rather than expiring.
//! 2. **Apply**: claimed food is removed and the claimant grows; expired food
//!    is removed.  Each removal clears every fish target pointing at it in
//!    the same step.

use aq_core::{AquariumConfig, FishId, FoodId};
use aq_entity::EntityStore;
use rustc_hash::FxHashSet;

/// A fish eating a food particle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Meal {
    pub fish:        FishId,
    pub food:        FoodId,
    pub size_before: f64,
    pub size_after:  f64,
}

/// Everything the resolver removed this tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resolution {
    pub meals:   Vec<Meal>,
    pub expired: Vec<FoodId>,
    /// Fish whose target was cleared because someone else ate it or it
    /// expired.  The eater itself is not counted.
    pub targets_cleared: usize,
}

/// Run both passes against `store`.
pub fn resolve(store: &mut EntityStore, config: &AquariumConfig) -> Resolution {
    // ── Scan ──────────────────────────────────────────────────────────────
    let radius_sq = config.consumption_radius * config.consumption_radius;
    let mut claimed: FxHashSet<FoodId> = FxHashSet::default();
    let mut claims: Vec<(FishId, FoodId)> = Vec::new();

    for fish in store.fish() {
        let Some(target) = fish.target else { continue };
        let Some(food) = store.food(target) else { continue };
        if fish.position.distance_sq(food.position) <= radius_sq && claimed.insert(target) {
            claims.push((fish.id(), target));
        }
    }

    let mut expired = Vec::new();
    for food in store.foods_mut() {
        if !claimed.contains(&food.id()) && food.age_one_tick() {
            expired.push(food.id());
        }
    }

    // ── Apply ─────────────────────────────────────────────────────────────
    let mut resolution = Resolution { expired, ..Resolution::default() };

    for (fish_id, food_id) in claims {
        if store.remove_food(food_id).is_none() {
            continue;
        }
        let Some(fish) = store.fish_by_id_mut(fish_id) else { continue };
        let size_before = fish.size;
        fish.size += config.growth_per_food;
        fish.target = None;
        let size_after = fish.size;
        resolution.targets_cleared += store.clear_targets_of(food_id);
        resolution.meals.push(Meal { fish: fish_id, food: food_id, size_before, size_after });
    }

    for &food_id in &resolution.expired {
        store.remove_food(food_id);
        resolution.targets_cleared += store.clear_targets_of(food_id);
    }

    resolution
}
