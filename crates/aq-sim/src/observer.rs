//! Simulation observer trait for logging, tests and instrumentation.

use aq_core::{FishId, FoodId, Tick};

use crate::{Meal, TickReport, Violation};

/// Callbacks invoked by [`World::step`][crate::World::step] at key points in
/// the tick.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: meal counter
///
/// ```rust,ignore
/// struct MealCounter(usize);
///
/// impl SimObserver for MealCounter {
///     fn on_food_eaten(&mut self, _tick: Tick, _meal: &Meal) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A fish without a target picked `food`.
    fn on_target_acquired(&mut self, _tick: Tick, _fish: FishId, _food: FoodId) {}

    fn on_food_eaten(&mut self, _tick: Tick, _meal: &Meal) {}

    fn on_food_expired(&mut self, _tick: Tick, _food: FoodId) {}

    /// An invariant was found broken.  It has already been healed.
    fn on_violation(&mut self, _tick: Tick, _violation: &Violation) {}

    /// Called at the end of each tick with its summary.
    fn on_tick_end(&mut self, _report: &TickReport) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
