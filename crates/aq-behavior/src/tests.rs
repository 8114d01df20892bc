//! Unit tests for aq-behavior.

use aq_core::{AquariumConfig, Bounds, FishId, FishRng, Tick, Vec2};
use aq_entity::{EntityStore, FishRngs};

use crate::{BehaviorModel, FishBehavior, Intent, SimContext};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tank() -> Bounds {
    Bounds::new(400.0, 300.0).unwrap()
}

fn config() -> AquariumConfig {
    AquariumConfig::seeded_empty(7)
}

/// Store with one fish at `pos`, fixed traits for predictable speeds.
fn one_fish(pos: Vec2, cfg: &AquariumConfig) -> (EntityStore, FishId) {
    let mut store = EntityStore::new();
    let mut rngs = FishRngs::new(7);
    let id = store.insert_fish(pos, tank(), &mut rngs, cfg);
    let fish = store.fish_by_id_mut(id).unwrap();
    fish.max_speed = 0.5;
    fish.wander_angle = 0.0;
    (store, id)
}

fn decide(store: &EntityStore, id: FishId, cfg: &AquariumConfig) -> Vec<Intent> {
    let ctx = SimContext::new(Tick::ZERO, tank(), cfg, store);
    let fish = store.fish_by_id(id).unwrap();
    let mut rng = FishRng::new(7, id);
    FishBehavior.decide(fish, &ctx, &mut rng)
}

fn steer_of(intents: &[Intent]) -> Vec2 {
    intents
        .iter()
        .find_map(|i| match i {
            Intent::Steer(v) => Some(*v),
            _ => None,
        })
        .expect("every FishBehavior decision steers")
}

// ── Sensing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sensing {
    use super::*;
    use crate::sense::nearest_food;

    #[test]
    fn picks_nearest_inside_radius() {
        let (mut store, _) = one_fish(Vec2::new(100.0, 100.0), &config());
        let far = store.insert_food(Vec2::new(150.0, 100.0), tank(), 10);
        let near = store.insert_food(Vec2::new(110.0, 100.0), tank(), 10);
        let got = nearest_food(&store, Vec2::new(100.0, 100.0), 400.0).unwrap();
        assert_eq!(got.id(), near);
        assert_ne!(got.id(), far);
    }

    #[test]
    fn ignores_food_outside_radius() {
        let (mut store, _) = one_fish(Vec2::new(0.0, 0.0), &config());
        store.insert_food(Vec2::new(300.0, 0.0), tank(), 10);
        assert!(nearest_food(&store, Vec2::ZERO, 100.0).is_none());
    }

    #[test]
    fn tie_goes_to_lowest_id() {
        let (mut store, _) = one_fish(Vec2::new(100.0, 100.0), &config());
        let first = store.insert_food(Vec2::new(150.0, 100.0), tank(), 10);
        let b = store.insert_food(Vec2::new(120.0, 100.0), tank(), 10);
        let c = store.insert_food(Vec2::new(80.0, 100.0), tank(), 10);
        // swap_remove moves `c` into slot 0, ahead of `b`.
        store.remove_food(first);
        assert_eq!(store.foods()[0].id(), c);
        let got = nearest_food(&store, Vec2::new(100.0, 100.0), 400.0).unwrap();
        assert_eq!(got.id(), b);
    }
}

// ── Boundary push ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod boundary {
    use super::*;
    use crate::sense::boundary_push;

    /// Sand line of [`tank`] at the default floor level.
    const FLOOR: f64 = 270.0;

    #[test]
    fn zero_in_interior() {
        let p = boundary_push(Vec2::new(200.0, 150.0), tank(), FLOOR, 60.0, None);
        assert_eq!(p, Vec2::ZERO);
    }

    #[test]
    fn grows_toward_edge() {
        let near = boundary_push(Vec2::new(10.0, 150.0), tank(), FLOOR, 60.0, None);
        let nearer = boundary_push(Vec2::new(2.0, 150.0), tank(), FLOOR, 60.0, None);
        assert!(near.x > 0.0);
        assert!(nearer.x > near.x);
        assert_eq!(near.y, 0.0);
        let on_wall = boundary_push(Vec2::new(400.0, 150.0), tank(), FLOOR, 60.0, None);
        assert!((on_wall.x + 1.0).abs() < 1e-12);
    }

    #[test]
    fn suppressed_when_goal_lies_toward_wall() {
        let fish = Vec2::new(10.0, 150.0);
        let goal_at_wall = Some(Vec2::new(2.0, 150.0));
        let p = boundary_push(fish, tank(), FLOOR, 60.0, goal_at_wall);
        assert_eq!(p.x, 0.0);
        let goal_inside = Some(Vec2::new(200.0, 150.0));
        assert!(boundary_push(fish, tank(), FLOOR, 60.0, goal_inside).x > 0.0);
    }

    #[test]
    fn sand_line_is_the_bottom_wall() {
        let bounds = Bounds::new(400.0, 600.0).unwrap();
        let above_sand = boundary_push(Vec2::new(200.0, 500.0), bounds, 540.0, 60.0, None);
        assert!(above_sand.y < 0.0);
        assert_eq!(boundary_push(Vec2::new(200.0, 500.0), bounds, 600.0, 60.0, None).y, 0.0);
        let in_sand = boundary_push(Vec2::new(200.0, 570.0), bounds, 540.0, 60.0, None);
        assert!((in_sand.y + 1.0).abs() < 1e-12);
    }

    #[test]
    fn food_on_the_sand_stays_reachable() {
        let bounds = Bounds::new(400.0, 600.0).unwrap();
        let goal = Some(Vec2::new(200.0, 590.0));
        assert_eq!(boundary_push(Vec2::new(200.0, 530.0), bounds, 540.0, 60.0, goal).y, 0.0);
    }

    #[test]
    fn zero_margin_disables() {
        assert_eq!(boundary_push(Vec2::ZERO, tank(), FLOOR, 0.0, None), Vec2::ZERO);
    }
}

// ── FishBehavior ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod fish_behavior {
    use super::*;

    #[test]
    fn acquires_nearest_food_and_steers_at_it() {
        let cfg = config();
        let (mut store, id) = one_fish(Vec2::new(100.0, 150.0), &cfg);
        let food = store.insert_food(Vec2::new(200.0, 150.0), tank(), 10);
        let intents = decide(&store, id, &cfg);
        assert_eq!(intents[0], Intent::Pursue(food));
        let v = steer_of(&intents);
        assert!(v.x > 0.0);
        assert!(v.y.abs() < 1e-12);
        assert!((v.length() - (0.5 + cfg.pursuit_boost)).abs() < 1e-9);
    }

    #[test]
    fn live_target_is_kept_without_reacquiring() {
        let cfg = config();
        let (mut store, id) = one_fish(Vec2::new(100.0, 150.0), &cfg);
        let kept = store.insert_food(Vec2::new(100.0, 250.0), tank(), 10);
        store.insert_food(Vec2::new(110.0, 150.0), tank(), 10);
        store.fish_by_id_mut(id).unwrap().target = Some(kept);
        let intents = decide(&store, id, &cfg);
        assert!(!intents.iter().any(|i| matches!(i, Intent::Pursue(_))));
        assert!(steer_of(&intents).y > 0.0);
    }

    #[test]
    fn dangling_target_is_cleared_then_replaced() {
        let cfg = config();
        let (mut store, id) = one_fish(Vec2::new(100.0, 150.0), &cfg);
        let gone = store.insert_food(Vec2::new(120.0, 150.0), tank(), 10);
        let other = store.insert_food(Vec2::new(100.0, 200.0), tank(), 10);
        store.fish_by_id_mut(id).unwrap().target = Some(gone);
        store.remove_food(gone);
        let intents = decide(&store, id, &cfg);
        assert_eq!(intents[0], Intent::ClearTarget);
        assert_eq!(intents[1], Intent::Pursue(other));
    }

    #[test]
    fn wanders_without_food_within_jitter() {
        let cfg = config();
        let (store, id) = one_fish(Vec2::new(200.0, 150.0), &cfg);
        let intents = decide(&store, id, &cfg);
        let angle = intents
            .iter()
            .find_map(|i| match i {
                Intent::SetWanderAngle(a) => Some(*a),
                _ => None,
            })
            .unwrap();
        assert!(angle.abs() <= cfg.wander_jitter + 1e-12);
        let v = steer_of(&intents);
        assert!((v.length() - 0.5 * cfg.wander_speed_factor).abs() < 1e-9);
    }

    #[test]
    fn wander_is_deterministic() {
        let cfg = config();
        let (store, id) = one_fish(Vec2::new(200.0, 150.0), &cfg);
        assert_eq!(decide(&store, id, &cfg), decide(&store, id, &cfg));
    }

    #[test]
    fn wall_turns_a_wandering_fish_inward() {
        let cfg = config();
        let (mut store, id) = one_fish(Vec2::new(398.0, 150.0), &cfg);
        // Heading straight into the right wall.
        store.fish_by_id_mut(id).unwrap().wander_angle = 0.0;
        let v = steer_of(&decide(&store, id, &cfg));
        assert!(v.x < 0.0);
        assert!(v.length() <= 0.5 + 1e-9);
    }

    #[test]
    fn sand_turns_a_diving_fish_upward() {
        let cfg = config();
        let (mut store, id) = one_fish(Vec2::new(200.0, 265.0), &cfg);
        store.fish_by_id_mut(id).unwrap().wander_angle = std::f64::consts::FRAC_PI_2;
        let v = steer_of(&decide(&store, id, &cfg));
        assert!(v.y < 0.0);
    }

    #[test]
    fn food_on_wall_is_still_approached() {
        let cfg = config();
        let (mut store, id) = one_fish(Vec2::new(20.0, 150.0), &cfg);
        store.insert_food(Vec2::new(0.0, 150.0), tank(), 10);
        let v = steer_of(&decide(&store, id, &cfg));
        assert!(v.x < 0.0);
    }

    #[test]
    fn noop_returns_nothing() {
        let cfg = config();
        let (store, id) = one_fish(Vec2::new(200.0, 150.0), &cfg);
        let ctx = SimContext::new(Tick::ZERO, tank(), &cfg, &store);
        let fish = store.fish_by_id(id).unwrap();
        let mut rng = FishRng::new(0, id);
        assert!(crate::NoopBehavior.decide(fish, &ctx, &mut rng).is_empty());
    }
}
