//! The host-independent aquarium facade.
//!
//! # Lifecycle
//!
//! ```text
//!   Uninitialized ──bind──▶ Bound ──destroy──▶ Released
//!                             │ ▲
//!                             └─┘ tick / add_food / add_fish
//! ```
//!
//! `add_food`/`add_fish` are valid only while bound and otherwise fail with
//! [`AqError::InvalidState`] without touching anything.  `tick` never fails:
//! unbound it does nothing, bound it always renders a frame, even for an
//! empty tank.
//!
//! # Surface binding
//!
//! The drawing surface is borrowed from the host, never owned by the world.
//! It is held in a [`Binding`] guard from the moment [`SurfaceHost::acquire`]
//! returns.  Releasing is the surface's `Drop`, so every exit path gives it
//! back: a failed `bind` partway through, `destroy`, or dropping the
//! aquarium.

use aq_core::{AqError, AqResult, AquariumConfig, Bounds, EntropySource, FishId, FoodId, OsEntropy, Tick, Vec2};
use aq_render::{FrameReport, Renderer, Surface};
use aq_sim::{Meal, SimError, SimObserver, TickReport, World, WorldBuilder};

// ── SurfaceHost ───────────────────────────────────────────────────────────────

/// The host environment: turns an opaque identifier into a drawing surface.
///
/// Dropping the returned surface must release whatever the host associated
/// with it.
pub trait SurfaceHost {
    type Surface: Surface;

    fn acquire(&mut self, surface_id: &str) -> AqResult<Self::Surface>;
}

// ── Binding ───────────────────────────────────────────────────────────────────

/// Scoped hold on an acquired surface.
pub struct Binding<S: Surface> {
    id:      String,
    surface: S,
}

impl<S: Surface> Binding<S> {
    fn new(id: &str, surface: S) -> Self {
        tracing::debug!(surface = id, "surface bound");
        Self { id: id.to_owned(), surface }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Current size as tank bounds, or `None` while the surface is empty.
    fn bounds(&self) -> Option<Bounds> {
        let (w, h) = self.surface.dimensions();
        Bounds::new(w, h)
    }
}

impl<S: Surface> Drop for Binding<S> {
    fn drop(&mut self) {
        tracing::debug!(surface = %self.id, "surface released");
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Everything that exists only while bound.
struct Session<S: Surface> {
    binding:  Binding<S>,
    world:    World,
    renderer: Renderer,
}

/// Routes world events into the log.
struct Journal;

impl SimObserver for Journal {
    fn on_target_acquired(&mut self, tick: Tick, fish: FishId, food: FoodId) {
        tracing::trace!(%tick, %fish, %food, "target acquired");
    }

    fn on_food_eaten(&mut self, tick: Tick, meal: &Meal) {
        tracing::debug!(%tick, fish = %meal.fish, food = %meal.food, size = meal.size_after, "food eaten");
    }

    fn on_food_expired(&mut self, tick: Tick, food: FoodId) {
        tracing::debug!(%tick, %food, "food expired");
    }
}

/// Result of one bound [`Aquarium::tick`].
#[derive(Clone, Debug, PartialEq)]
pub struct TickSummary {
    pub sim:     TickReport,
    pub frame:   FrameReport,
    /// The surface changed size before this tick and the tank followed.
    pub resized: bool,
}

// ── Aquarium ──────────────────────────────────────────────────────────────────

enum Lifecycle<S: Surface> {
    Uninitialized,
    Bound(Box<Session<S>>),
    Released,
}

impl<S: Surface> Lifecycle<S> {
    fn name(&self) -> &'static str {
        match self {
            Lifecycle::Uninitialized => "uninitialized",
            Lifecycle::Bound(_) => "bound",
            Lifecycle::Released => "released",
        }
    }
}

/// One aquarium bound to one drawing surface.
///
/// Independent instances share nothing, so a page may run several.
pub struct Aquarium<H: SurfaceHost> {
    host:   H,
    config: AquariumConfig,
    state:  Lifecycle<H::Surface>,
}

impl<H: SurfaceHost> Aquarium<H> {
    /// An unbound aquarium.  Nothing is acquired until [`bind`](Self::bind).
    pub fn new(host: H, config: AquariumConfig) -> Self {
        Self { host, config, state: Lifecycle::Uninitialized }
    }

    /// Construct and bind in one step.  On failure no aquarium is returned
    /// and anything acquired has already been released.
    pub fn create(host: H, config: AquariumConfig, surface_id: &str) -> AqResult<Self> {
        let mut aquarium = Self::new(host, config);
        aquarium.bind(surface_id)?;
        Ok(aquarium)
    }

    pub fn bind(&mut self, surface_id: &str) -> AqResult<()> {
        self.bind_with_entropy(surface_id, &mut OsEntropy)
    }

    /// Acquire the surface, size the tank to it and build the world.
    pub fn bind_with_entropy(
        &mut self,
        surface_id: &str,
        entropy: &mut dyn EntropySource,
    ) -> AqResult<()> {
        if !matches!(self.state, Lifecycle::Uninitialized) {
            return Err(rejected("bind", self.state.name()));
        }

        let binding = Binding::new(surface_id, self.host.acquire(surface_id)?);
        let Some(bounds) = binding.bounds() else {
            let (w, h) = binding.surface.dimensions();
            return Err(AqError::Config(format!(
                "surface {surface_id:?} has unusable size {w}x{h}"
            )));
        };
        let world = WorldBuilder::new(self.config.clone(), bounds)
            .build_with_entropy(entropy)
            .map_err(|err| match err {
                SimError::Core(core) => core,
                other => AqError::Config(other.to_string()),
            })?;
        let renderer = Renderer::new(world.seed(), bounds, self.config.floor_level);

        self.state = Lifecycle::Bound(Box::new(Session { binding, world, renderer }));
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.state, Lifecycle::Bound(_))
    }

    pub fn world(&self) -> Option<&World> {
        self.session().map(|s| &s.world)
    }

    pub fn binding(&self) -> Option<&Binding<H::Surface>> {
        self.session().map(|s| &s.binding)
    }

    pub fn binding_mut(&mut self) -> Option<&mut Binding<H::Surface>> {
        match &mut self.state {
            Lifecycle::Bound(session) => Some(&mut session.binding),
            _ => None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Drop food at surface-local `(x, y)`; out-of-tank coordinates are
    /// clamped to the nearest edge point.
    pub fn add_food(&mut self, x: f64, y: f64) -> AqResult<FoodId> {
        match &mut self.state {
            Lifecycle::Bound(session) => Ok(session.world.add_food(Vec2::new(x, y))),
            other => Err(rejected("add_food", other.name())),
        }
    }

    /// Add a fish at surface-local `(x, y)`, clamped like [`add_food`](Self::add_food).
    pub fn add_fish(&mut self, x: f64, y: f64) -> AqResult<FishId> {
        match &mut self.state {
            Lifecycle::Bound(session) => Ok(session.world.add_fish(Vec2::new(x, y))),
            other => Err(rejected("add_fish", other.name())),
        }
    }

    /// Follow a surface resize, advance the world one step and paint it.
    ///
    /// Returns `None` when not bound.  Never fails.
    pub fn tick(&mut self) -> Option<TickSummary> {
        let session = match &mut self.state {
            Lifecycle::Bound(session) => session,
            other => {
                tracing::trace!(state = other.name(), "tick ignored");
                return None;
            }
        };
        let Session { binding, world, renderer } = session.as_mut();

        let mut resized = false;
        if let Some(bounds) = binding.bounds() {
            if bounds != world.bounds() {
                world.resize(bounds);
                resized = true;
            }
        }

        let sim = world.step(&mut Journal);
        let frame = renderer.render(world.store(), world.bounds(), &mut binding.surface);
        Some(TickSummary { sim, frame, resized })
    }

    /// Release the world and the surface.  Idempotent; afterwards every
    /// mutating call fails with `InvalidState`.
    pub fn destroy(&mut self) {
        if matches!(self.state, Lifecycle::Bound(_)) {
            tracing::debug!("aquarium destroyed");
        }
        self.state = Lifecycle::Released;
    }

    fn session(&self) -> Option<&Session<H::Surface>> {
        match &self.state {
            Lifecycle::Bound(session) => Some(session),
            _ => None,
        }
    }
}

fn rejected(op: &'static str, state: &'static str) -> AqError {
    tracing::warn!(op, state, "call rejected");
    AqError::InvalidState { op, state }
}
