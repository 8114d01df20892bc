//! The `Food` entity.

use aq_core::{FoodId, Vec2};

/// A food particle dropped by the user.
///
/// Food never moves and is never mutated after a fish claims it: a claim
/// removes it from the store in the same step.  The only per-tick change is
/// the lifetime countdown.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Food {
    id: FoodId,

    pub position: Vec2,

    /// Ticks left before silent expiry.
    pub remaining_ticks: u32,
}

impl Food {
    pub fn new(id: FoodId, position: Vec2, lifetime_ticks: u32) -> Self {
        Self { id, position, remaining_ticks: lifetime_ticks }
    }

    #[inline]
    pub fn id(&self) -> FoodId {
        self.id
    }

    /// Count one tick down.  Returns `true` once the lifetime is used up.
    #[inline]
    pub fn age_one_tick(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks == 0
    }
}
