//! Re-entrancy-safe handle shared between the host's callbacks.
//!
//! A browser page calls into the aquarium from several places: pointer
//! handlers and the animation-frame loop.  They all hold clones of one
//! [`SharedAquarium`].  If an input arrives while a tick still holds the
//! aquarium, it is queued and applied at the start of the next tick, so
//! inputs never interleave with a step.

use std::cell::{RefCell, RefMut};
use std::collections::VecDeque;
use std::rc::Rc;

use aq_core::{AqResult, FishId, FoodId, Vec2};

use crate::facade::{Aquarium, SurfaceHost, TickSummary};

/// A host input, in arrival order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    AddFood(Vec2),
    AddFish(Vec2),
    Destroy,
}

/// What a command did once applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Applied {
    Food(FoodId),
    Fish(FishId),
    Destroyed,
}

/// Outcome of [`SharedAquarium::submit`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Submitted {
    Applied(Applied),
    /// The aquarium was busy; the command runs at the start of the next tick.
    Queued,
}

impl<H: SurfaceHost> Aquarium<H> {
    pub fn apply(&mut self, command: Command) -> AqResult<Applied> {
        match command {
            Command::AddFood(at) => self.add_food(at.x, at.y).map(Applied::Food),
            Command::AddFish(at) => self.add_fish(at.x, at.y).map(Applied::Fish),
            Command::Destroy => {
                self.destroy();
                Ok(Applied::Destroyed)
            }
        }
    }
}

pub struct SharedAquarium<H: SurfaceHost> {
    inner:   Rc<RefCell<Aquarium<H>>>,
    pending: Rc<RefCell<VecDeque<Command>>>,
}

impl<H: SurfaceHost> Clone for SharedAquarium<H> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner), pending: Rc::clone(&self.pending) }
    }
}

impl<H: SurfaceHost> SharedAquarium<H> {
    pub fn new(aquarium: Aquarium<H>) -> Self {
        Self {
            inner:   Rc::new(RefCell::new(aquarium)),
            pending: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Apply `command` now, or queue it if a tick is in progress.
    ///
    /// Queued commands report their own failures to the log when they run.
    pub fn submit(&self, command: Command) -> AqResult<Submitted> {
        match self.inner.try_borrow_mut() {
            Ok(mut aquarium) => aquarium.apply(command).map(Submitted::Applied),
            Err(_) => {
                self.pending.borrow_mut().push_back(command);
                tracing::debug!(?command, "aquarium busy; command queued");
                Ok(Submitted::Queued)
            }
        }
    }

    pub fn add_food(&self, x: f64, y: f64) -> AqResult<Submitted> {
        self.submit(Command::AddFood(Vec2::new(x, y)))
    }

    pub fn add_fish(&self, x: f64, y: f64) -> AqResult<Submitted> {
        self.submit(Command::AddFish(Vec2::new(x, y)))
    }

    pub fn destroy(&self) -> Submitted {
        match self.inner.try_borrow_mut() {
            Ok(mut aquarium) => {
                aquarium.destroy();
                Submitted::Applied(Applied::Destroyed)
            }
            Err(_) => {
                self.pending.borrow_mut().push_back(Command::Destroy);
                Submitted::Queued
            }
        }
    }

    /// Drain queued commands in order, then tick.
    ///
    /// A re-entrant tick (from inside another tick) is skipped.
    pub fn tick(&self) -> Option<TickSummary> {
        let Ok(mut aquarium) = self.inner.try_borrow_mut() else {
            tracing::warn!("re-entrant tick skipped");
            return None;
        };
        let queued = std::mem::take(&mut *self.pending.borrow_mut());
        for command in queued {
            if let Err(error) = aquarium.apply(command) {
                tracing::warn!(?command, %error, "queued command failed");
            }
        }
        aquarium.tick()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Run `f` against the aquarium, unless it is mutably held.
    pub fn inspect<R>(&self, f: impl FnOnce(&Aquarium<H>) -> R) -> Option<R> {
        self.inner.try_borrow().ok().map(|aquarium| f(&aquarium))
    }

    /// Hold the aquarium mutably, if nothing else does.  Any `submit` while
    /// the guard lives is queued.
    pub fn try_lock(&self) -> Option<RefMut<'_, Aquarium<H>>> {
        self.inner.try_borrow_mut().ok()
    }
}
