//! The default fish behavior: seek food, otherwise wander, always mind the
//! walls.

use aq_core::{FishRng, Vec2};
use aq_entity::Fish;

use crate::sense::{boundary_push, nearest_food};
use crate::{BehaviorModel, Intent, SimContext};

/// Seek / wander / avoid steering driven entirely by [`AquariumConfig`]
/// tunables.
///
/// Per fish, per tick:
///
/// 1. A target that still resolves in the store is kept.  One that does not
///    is dropped with [`Intent::ClearTarget`].
/// 2. Without a target, the nearest food inside `sensing_radius` is acquired
///    with [`Intent::Pursue`].
/// 3. With a target, the desired velocity points at it at the pursuit speed
///    cap.  Without one, the wander angle is jittered by at most
///    `wander_jitter` and the fish cruises along it at
///    `wander_speed_factor` of its cap.
/// 4. Near a side wall, the surface or the sand line (`floor_level`), a
///    push toward the interior is added, scaled by `boundary_gain` and the
///    speed cap.
///
/// [`AquariumConfig`]: aq_core::AquariumConfig
pub struct FishBehavior;

impl BehaviorModel for FishBehavior {
    fn decide(&self, fish: &Fish, ctx: &SimContext<'_>, rng: &mut FishRng) -> Vec<Intent> {
        let cfg = ctx.config;
        let mut intents = Vec::with_capacity(3);

        let mut goal = match fish.target {
            Some(id) => match ctx.store.food(id) {
                Some(food) => Some(food.position),
                None => {
                    intents.push(Intent::ClearTarget);
                    None
                }
            },
            None => None,
        };
        if goal.is_none() {
            if let Some(food) = nearest_food(ctx.store, fish.position, cfg.sensing_radius) {
                intents.push(Intent::Pursue(food.id()));
                goal = Some(food.position);
            }
        }

        let cap = match goal {
            Some(_) => fish.max_speed + cfg.pursuit_boost,
            None => fish.max_speed,
        };

        let seek = match goal {
            Some(target) => (target - fish.position)
                .normalized()
                .map_or(Vec2::ZERO, |dir| dir * cap),
            None => {
                let angle = fish.wander_angle + rng.symmetric(cfg.wander_jitter);
                Vec2::from_angle(angle) * (cap * cfg.wander_speed_factor)
            }
        };

        let floor_y = cfg.floor_y(ctx.bounds);
        let push = boundary_push(fish.position, ctx.bounds, floor_y, cfg.boundary_margin, goal);
        let desired = (seek + push * (cfg.boundary_gain * cap)).clamp_length(cap);

        // Carry the wall-adjusted direction, not the raw jittered one.
        if goal.is_none() {
            let angle = desired.angle().unwrap_or(fish.wander_angle);
            intents.push(Intent::SetWanderAngle(angle));
        }

        intents.push(Intent::Steer(desired));
        intents
    }
}
