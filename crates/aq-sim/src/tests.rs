//! Unit tests for aq-sim.

use aq_core::{AquariumConfig, Bounds, FishId, FixedEntropy, FoodId, Tick, Vec2};

use crate::{Meal, NoopObserver, SimObserver, TickReport, Violation, World, WorldBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tank() -> Bounds {
    Bounds::new(800.0, 600.0).unwrap()
}

fn empty_world(config: AquariumConfig) -> World {
    WorldBuilder::new(config, tank())
        .build_with_entropy(&mut FixedEntropy(0))
        .unwrap()
}

fn seeded() -> AquariumConfig {
    AquariumConfig::seeded_empty(42)
}

#[derive(Default)]
struct Recorder {
    starts:     Vec<Tick>,
    acquired:   Vec<(FishId, FoodId)>,
    meals:      Vec<Meal>,
    expired:    Vec<FoodId>,
    violations: Vec<Violation>,
    ends:       usize,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.starts.push(tick);
    }
    fn on_target_acquired(&mut self, _tick: Tick, fish: FishId, food: FoodId) {
        self.acquired.push((fish, food));
    }
    fn on_food_eaten(&mut self, _tick: Tick, meal: &Meal) {
        self.meals.push(*meal);
    }
    fn on_food_expired(&mut self, _tick: Tick, food: FoodId) {
        self.expired.push(food);
    }
    fn on_violation(&mut self, _tick: Tick, violation: &Violation) {
        self.violations.push(violation.clone());
    }
    fn on_tick_end(&mut self, _report: &TickReport) {
        self.ends += 1;
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use aq_core::AqError;

    use super::*;
    use crate::SimError;
    use crate::builder::MAX_INITIAL_FISH;

    #[test]
    fn spawns_initial_school_inside_tank() {
        let config = AquariumConfig { seed: Some(3), ..AquariumConfig::default() };
        let world = WorldBuilder::new(config, tank()).build().unwrap();
        assert_eq!(world.store().fish_count(), 15);
        assert!(world.store().fish().iter().all(|f| tank().contains(f.position)));
    }

    #[test]
    fn initial_school_starts_above_the_sand() {
        let config = AquariumConfig { seed: Some(3), initial_fish: 40, floor_level: 0.5, ..AquariumConfig::default() };
        let world = WorldBuilder::new(config, tank()).build().unwrap();
        let floor_y = tank().height * 0.5;
        assert!(world.store().fish().iter().all(|f| f.position.y <= floor_y));
    }

    #[test]
    fn unseeded_config_takes_entropy() {
        let config = AquariumConfig { seed: None, initial_fish: 0, ..AquariumConfig::default() };
        let world = WorldBuilder::new(config, tank())
            .build_with_entropy(&mut FixedEntropy(1234))
            .unwrap();
        assert_eq!(world.seed(), 1234);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = AquariumConfig { turn_rate: 0.0, ..seeded() };
        let err = WorldBuilder::new(config, tank()).build().err().unwrap();
        assert!(matches!(err, SimError::Core(AqError::Config(_))));
    }

    #[test]
    fn oversized_school_is_rejected() {
        let config = AquariumConfig { initial_fish: MAX_INITIAL_FISH + 1, ..seeded() };
        let err = WorldBuilder::new(config, tank()).build().err().unwrap();
        assert!(matches!(err, SimError::SchoolTooLarge { .. }));
    }

    #[test]
    fn same_seed_same_school() {
        let config = AquariumConfig { seed: Some(9), ..AquariumConfig::default() };
        let a = WorldBuilder::new(config.clone(), tank()).build().unwrap();
        let b = WorldBuilder::new(config, tank()).build().unwrap();
        assert_eq!(a.store().fish(), b.store().fish());
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick {
    use super::*;

    #[test]
    fn empty_tank_steps_quietly() {
        let mut world = empty_world(seeded());
        for _ in 0..10 {
            let report = world.step(&mut NoopObserver);
            assert!(report.meals.is_empty());
            assert!(report.violations.is_empty());
        }
        assert_eq!(world.tick(), Tick(10));
    }

    #[test]
    fn add_fish_outside_tank_is_clamped() {
        let mut world = empty_world(seeded());
        let id = world.add_fish(Vec2::new(-50.0, 9_000.0));
        let fish = world.store().fish_by_id(id).unwrap();
        assert_eq!(fish.position, Vec2::new(0.0, 600.0));
    }

    #[test]
    fn fish_finds_and_eats_nearby_food() {
        let mut world = empty_world(seeded());
        let fish = world.add_fish(Vec2::new(10.0, 10.0));
        let food = world.add_food(Vec2::new(12.0, 10.0));
        let mut rec = Recorder::default();

        for _ in 0..50 {
            world.step(&mut rec);
            if !rec.meals.is_empty() {
                break;
            }
        }
        assert_eq!(rec.acquired.first(), Some(&(fish, food)));
        let meal = rec.meals[0];
        assert_eq!((meal.fish, meal.food), (fish, food));
        assert!((meal.size_after - meal.size_before - 1.5).abs() < 1e-12);
        assert!(!world.store().contains_food(food));
        assert_eq!(world.store().fish_by_id(fish).unwrap().target, None);
    }

    #[test]
    fn distant_food_is_reached_in_bounded_ticks() {
        let mut world = empty_world(seeded());
        let fish = world.add_fish(Vec2::new(100.0, 300.0));
        let food = world.add_food(Vec2::new(300.0, 300.0));
        let size_before = world.store().fish_by_id(fish).unwrap().size;

        let mut eaten_at = None;
        for _ in 0..1_000 {
            let report = world.step(&mut NoopObserver);
            if report.meals.iter().any(|m| m.food == food) {
                eaten_at = Some(report.tick);
                break;
            }
            assert_eq!(world.store().fish_by_id(fish).unwrap().target, Some(food));
        }
        assert!(eaten_at.is_some());
        assert!(world.store().fish_by_id(fish).unwrap().size > size_before);
    }

    #[test]
    fn food_with_lifetime_one_expires_after_one_tick() {
        let mut world = empty_world(AquariumConfig { food_lifetime_ticks: 1, ..seeded() });
        let food = world.add_food(Vec2::new(400.0, 300.0));
        let report = world.step(&mut NoopObserver);
        assert_eq!(report.expired, vec![food]);
        assert!(!world.store().contains_food(food));
    }

    #[test]
    fn expiry_clears_pursuers() {
        let config = AquariumConfig { sensing_radius: 2_000.0, ..seeded() };
        let mut world = empty_world(config);
        let fish = world.add_fish(Vec2::new(10.0, 10.0));
        let food = world.add_food_with_lifetime(Vec2::new(790.0, 590.0), 3);
        let mut rec = Recorder::default();
        world.run_ticks(3, &mut rec);
        assert_eq!(rec.expired, vec![food]);
        assert_eq!(world.store().fish_by_id(fish).unwrap().target, None);
        assert!(rec.violations.is_empty());
    }

    #[test]
    fn first_claimant_in_store_order_wins() {
        let mut world = empty_world(seeded());
        let a = world.add_fish(Vec2::new(100.0, 100.0));
        let b = world.add_fish(Vec2::new(100.0, 100.0));
        let food = world.add_food(Vec2::new(103.0, 100.0));
        let size_b = world.store().fish_by_id(b).unwrap().size;

        let report = world.step(&mut NoopObserver);
        assert_eq!(report.meals.len(), 1);
        assert_eq!(report.meals[0].fish, a);
        assert_eq!(report.meals[0].food, food);
        let loser = world.store().fish_by_id(b).unwrap();
        assert_eq!(loser.target, None);
        assert!(loser.size <= size_b);
    }

    #[test]
    fn size_decays_to_floor() {
        let config = AquariumConfig { size_decay_per_tick: 0.5, min_fish_size: 4.0, ..seeded() };
        let mut world = empty_world(config);
        let id = world.add_fish(Vec2::new(400.0, 300.0));
        world.store_mut().fish_by_id_mut(id).unwrap().size = 4.2;
        world.step(&mut NoopObserver);
        assert_eq!(world.store().fish_by_id(id).unwrap().size, 4.0);
        world.step(&mut NoopObserver);
        assert_eq!(world.store().fish_by_id(id).unwrap().size, 4.0);
    }

    #[test]
    fn observer_sees_every_tick() {
        let mut world = empty_world(seeded());
        let mut rec = Recorder::default();
        world.run_ticks(4, &mut rec);
        assert_eq!(rec.starts, vec![Tick(0), Tick(1), Tick(2), Tick(3)]);
        assert_eq!(rec.ends, 4);
    }

    #[test]
    fn resize_pulls_everything_inside() {
        let mut world = empty_world(seeded());
        let fish = world.add_fish(Vec2::new(790.0, 590.0));
        let food = world.add_food(Vec2::new(700.0, 50.0));
        let small = Bounds::new(200.0, 100.0).unwrap();
        world.resize(small);
        assert_eq!(world.bounds(), small);
        assert_eq!(world.store().fish_by_id(fish).unwrap().position, Vec2::new(200.0, 100.0));
        assert_eq!(world.store().food(food).unwrap().position, Vec2::new(200.0, 50.0));
        let report = world.step(&mut NoopObserver);
        assert!(report.violations.is_empty());
    }
}

// ── Audit ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod audit {
    use super::*;
    use crate::audit::inspect;

    #[test]
    fn dangling_target_is_reported_and_healed() {
        let mut world = empty_world(seeded());
        let id = world.add_fish(Vec2::new(400.0, 300.0));
        world.store_mut().fish_by_id_mut(id).unwrap().target = Some(FoodId(99));

        let mut rec = Recorder::default();
        let report = world.step(&mut rec);
        assert_eq!(report.violations, vec![Violation::DanglingTarget { fish: id, food: FoodId(99) }]);
        assert_eq!(rec.violations.len(), 1);
        assert_eq!(world.store().fish_by_id(id).unwrap().target, None);
    }

    #[test]
    fn negative_size_and_escaped_position_are_healed() {
        let mut world = empty_world(seeded());
        let id = world.add_fish(Vec2::new(400.0, 300.0));
        {
            let fish = world.store_mut().fish_by_id_mut(id).unwrap();
            fish.size = -3.0;
            fish.position = Vec2::new(f64::NAN, 2_000.0);
        }
        let found = world.audit();
        assert_eq!(found.len(), 2);
        let fish = world.store().fish_by_id(id).unwrap();
        assert_eq!(fish.size, 0.0);
        assert!(tank().contains(fish.position));
        assert!(inspect(world.store(), world.bounds()).is_empty());
    }

    #[test]
    fn clean_world_has_no_violations() {
        let config = AquariumConfig { seed: Some(5), ..AquariumConfig::default() };
        let world = WorldBuilder::new(config, tank()).build().unwrap();
        assert!(inspect(world.store(), world.bounds()).is_empty());
    }
}

// ── Resolver ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod resolver {
    use aq_entity::{EntityStore, FishRngs};

    use super::*;
    use crate::resolver::resolve;

    #[test]
    fn claimed_food_on_its_last_tick_is_eaten_not_expired() {
        let config = seeded();
        let mut store = EntityStore::new();
        let mut rngs = FishRngs::new(1);
        let fish = store.insert_fish(Vec2::new(50.0, 50.0), tank(), &mut rngs, &config);
        let food = store.insert_food(Vec2::new(52.0, 50.0), tank(), 1);
        store.fish_by_id_mut(fish).unwrap().target = Some(food);

        let res = resolve(&mut store, &config);
        assert_eq!(res.meals.len(), 1);
        assert!(res.expired.is_empty());
        assert_eq!(store.food_count(), 0);
    }

    #[test]
    fn out_of_reach_target_is_kept() {
        let config = seeded();
        let mut store = EntityStore::new();
        let mut rngs = FishRngs::new(1);
        let fish = store.insert_fish(Vec2::new(50.0, 50.0), tank(), &mut rngs, &config);
        let food = store.insert_food(Vec2::new(150.0, 50.0), tank(), 10);
        store.fish_by_id_mut(fish).unwrap().target = Some(food);

        let res = resolve(&mut store, &config);
        assert!(res.meals.is_empty());
        assert_eq!(store.fish_by_id(fish).unwrap().target, Some(food));
        assert_eq!(store.food(food).unwrap().remaining_ticks, 9);
    }

    #[test]
    fn many_removals_in_one_tick() {
        let config = seeded();
        let mut store = EntityStore::new();
        let ids: Vec<FoodId> = (0..6)
            .map(|i| store.insert_food(Vec2::new(10.0 * i as f64, 5.0), tank(), 1))
            .collect();
        let res = resolve(&mut store, &config);
        assert_eq!(res.expired, ids);
        assert_eq!(store.food_count(), 0);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;
    use crate::audit::inspect;

    fn point() -> impl Strategy<Value = (f64, f64)> {
        (-100.0f64..900.0, -100.0f64..700.0)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Fish stay in the tank and no target dangles across any tick.
        #[test]
        fn invariants_hold_every_tick(
            seed in any::<u64>(),
            fish in prop::collection::vec(point(), 1..8),
            food in prop::collection::vec((point(), 1u32..40), 0..10),
        ) {
            let mut world = empty_world(AquariumConfig::seeded_empty(seed));
            for (x, y) in fish {
                world.add_fish(Vec2::new(x, y));
            }
            for ((x, y), life) in food {
                world.add_food_with_lifetime(Vec2::new(x, y), life);
            }
            for _ in 0..60 {
                let report = world.step(&mut NoopObserver);
                prop_assert!(report.violations.is_empty());
                prop_assert!(inspect(world.store(), world.bounds()).is_empty());
                for f in world.store().fish() {
                    prop_assert!(tank().contains(f.position));
                    prop_assert!(f.size >= 0.0);
                }
            }
        }

        /// Identical seeds and placements give identical trajectories.
        #[test]
        fn runs_are_deterministic(seed in any::<u64>(), (x, y) in point()) {
            let config = AquariumConfig { seed: Some(seed), initial_fish: 6, ..AquariumConfig::default() };
            let mut a = WorldBuilder::new(config.clone(), tank()).build().unwrap();
            let mut b = WorldBuilder::new(config, tank()).build().unwrap();
            a.add_food(Vec2::new(x, y));
            b.add_food(Vec2::new(x, y));
            for _ in 0..40 {
                prop_assert_eq!(a.step(&mut NoopObserver), b.step(&mut NoopObserver));
                prop_assert_eq!(a.store().fish(), b.store().fish());
            }
        }
    }
}
