//! Perception helpers: what a fish can see, and how hard the walls push.

use aq_core::{Bounds, Vec2};
use aq_entity::{EntityStore, Food};

/// Nearest food within `radius` of `from`.
///
/// Ties on distance go to the lowest id, so the choice never depends on the
/// store's slot order.
pub fn nearest_food(store: &EntityStore, from: Vec2, radius: f64) -> Option<&Food> {
    let limit = radius * radius;
    store
        .foods()
        .iter()
        .map(|food| (from.distance_sq(food.position), food))
        .filter(|&(d2, _)| d2 <= limit)
        .min_by(|(da, a), (db, b)| da.total_cmp(db).then_with(|| a.id().cmp(&b.id())))
        .map(|(_, food)| food)
}

/// Unit-scaled push back toward the interior.
///
/// The bottom wall is the sand line `floor_y`, not the tank edge.  Each axis
/// contributes `1 - d / margin` for a wall closer than `margin`, so the push
/// is zero at the margin and 1 on (or past) the wall itself.  When `goal` is
/// given, a wall is ignored if the goal lies beyond the fish toward it;
/// otherwise food dropped near a wall would be unreachable.
pub fn boundary_push(
    position: Vec2,
    bounds: Bounds,
    floor_y: f64,
    margin: f64,
    goal: Option<Vec2>,
) -> Vec2 {
    if margin <= 0.0 {
        return Vec2::ZERO;
    }
    let weight = |d: f64| if d < margin { 1.0 - d.max(0.0) / margin } else { 0.0 };

    let mut push = Vec2::ZERO;

    let toward_left = goal.is_some_and(|g| g.x < position.x);
    let toward_right = goal.is_some_and(|g| g.x > position.x);
    let toward_top = goal.is_some_and(|g| g.y < position.y);
    let toward_bottom = goal.is_some_and(|g| g.y > position.y);

    if !toward_left {
        push.x += weight(position.x);
    }
    if !toward_right {
        push.x -= weight(bounds.width - position.x);
    }
    if !toward_top {
        push.y += weight(position.y);
    }
    if !toward_bottom {
        push.y -= weight(floor_y.min(bounds.height) - position.y);
    }
    push
}
