//! Decorative layers: background gradient, god rays, the castle, bubbles,
//! crabs and seafloor.
//!
//! Scenery is animation state owned by the renderer.  It advances once per
//! frame from its own RNG and never reads or writes entities.

use std::f64::consts::{PI, TAU};

use aq_core::{Bounds, SimRng, Vec2};

use crate::castle::{BUBBLE_SOURCES, Castle, CastlePlacement};
use crate::{Color, Paint, Path, RenderResult, Surface};

pub const WATER_TOP: Color = Color::rgb(0x00, 0x5c, 0x97);
pub const WATER_BOTTOM: Color = Color::rgb(0x06, 0x22, 0x3b);
pub const SAND: Color = Color::rgb(0xc2, 0xb2, 0x80);

const RAY_LIGHT: Color = Color::rgb(210, 230, 255);
const RAY_MAX_ALPHA: f64 = 0.15;
const RAY_TILT_DEG: f64 = -15.0;
/// Rays start slightly above the top edge so the blur has no visible seam.
const RAY_TOP_OFFSET: f64 = -50.0;

const BUBBLE_FILL: Color = Color::rgba(220, 235, 255, 0.6);
const BUBBLE_RIM: Color = Color::rgba(255, 255, 255, 0.8);
const BUBBLE_COUNT: usize = 30;
const BUBBLE_WOBBLE_STEP: f64 = 0.05;
/// Sideways spread around a bubble source, in pixels.
const BUBBLE_SOURCE_SPREAD: f64 = 5.0;

const CRAB_COLOR: Color = Color::rgb(0xd1, 0x41, 0x24);
const CRAB_COUNT: usize = 3;
const CRAB_STEP: f64 = 0.5;
/// Height of a crab's body centre above the sand.
pub const CRAB_RIDE_HEIGHT: f64 = 8.0;
const CRAB_WALK_TICKS: std::ops::Range<u32> = 100..300;
const CRAB_WAIT_TICKS: std::ops::Range<u32> = 60..180;

const FLOOR_STEP_PX: f64 = 10.0;

/// Offsets of the scenery and castle streams derived from the master seed.
const SCENERY_STREAM: u64 = 2;
const CASTLE_STREAM: u64 = 3;

// ── GodRay ────────────────────────────────────────────────────────────────────

/// A slanted shaft of light that fades in and out over its lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct GodRay {
    pub x:            f64,
    pub top_width:    f64,
    pub bottom_width: f64,
    pub length:       f64,
    pub blur:         f64,
    pub life:         f64,
    pub max_life:     f64,
}

impl GodRay {
    fn spawn(rng: &mut SimRng, bounds: Bounds) -> Self {
        let top_width = rng.gen_range(20.0..150.0);
        Self {
            x: rng.gen_range(-bounds.width * 0.2..bounds.width * 1.2),
            top_width,
            bottom_width: rng.gen_range(0.0..top_width * 0.3),
            length: rng.gen_range(bounds.height * 0.5..bounds.height * 1.2),
            blur: rng.gen_range(10.0..25.0),
            life: 0.0,
            max_life: rng.gen_range(1200.0..1800.0),
        }
    }

    /// Peaks mid-life at [`RAY_MAX_ALPHA`], zero at both ends.
    pub fn alpha(&self) -> f64 {
        (self.life / self.max_life * PI).sin() * RAY_MAX_ALPHA
    }

    pub(crate) fn paint<S: Surface + ?Sized>(&self, surface: &mut S) -> RenderResult<()> {
        let alpha = self.alpha();
        if alpha <= 0.0 {
            return Ok(());
        }
        surface.set_blur(self.blur);
        surface.set_fill(&Paint::Solid(RAY_LIGHT.with_alpha(alpha)))?;
        surface.translate(self.x, 0.0)?;
        surface.rotate(RAY_TILT_DEG.to_radians())?;
        let (top, bottom) = (self.top_width / 2.0, self.bottom_width / 2.0);
        let y0 = RAY_TOP_OFFSET;
        let y1 = RAY_TOP_OFFSET + self.length;
        let shaft = Path::new()
            .move_to(Vec2::new(-top, y0))
            .line_to(Vec2::new(top, y0))
            .line_to(Vec2::new(bottom, y1))
            .line_to(Vec2::new(-bottom, y1))
            .close();
        surface.fill_path(&shaft)
    }
}

// ── Bubble ────────────────────────────────────────────────────────────────────

/// A bubble rising from the castle with a sideways wobble.
#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
    pub position: Vec2,
    pub origin_x: f64,
    pub radius:   f64,
    pub rise:     f64,
    pub wobble:   f64,
}

impl Bubble {
    /// A fresh bubble at one of the castle's sources.
    fn spawn(rng: &mut SimRng, castle: CastlePlacement) -> Self {
        let (sx, sy) = BUBBLE_SOURCES[rng.gen_range(0..BUBBLE_SOURCES.len())];
        let source = castle.to_tank(Vec2::new(sx, sy));
        let origin_x = source.x + rng.gen_range(-BUBBLE_SOURCE_SPREAD..BUBBLE_SOURCE_SPREAD);
        Self {
            position: Vec2::new(origin_x, source.y),
            origin_x,
            radius: rng.gen_range(1.0..5.0),
            rise: rng.gen_range(0.5..1.5),
            wobble: rng.gen_range(0.0..TAU),
        }
    }

    fn advance(&mut self) {
        self.position.y -= self.rise;
        self.wobble += BUBBLE_WOBBLE_STEP;
        self.position.x = self.origin_x + self.wobble.sin() * self.radius * 0.5;
    }

    pub(crate) fn paint<S: Surface + ?Sized>(&self, surface: &mut S) -> RenderResult<()> {
        let body = Path::circle(self.position, self.radius);
        surface.set_fill(&Paint::Solid(BUBBLE_FILL))?;
        surface.fill_path(&body)?;
        surface.set_stroke(BUBBLE_RIM, 1.0);
        surface.stroke_path(&body)
    }
}

// ── Crab ──────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CrabGait {
    Walking,
    Waiting,
}

/// A crab pacing the sand.  It alternates walking and waiting on random
/// timers and turns around at the side walls.
#[derive(Clone, Debug, PartialEq)]
pub struct Crab {
    pub position:  Vec2,
    pub size:      f64,
    /// `1.0` walks right, `-1.0` walks left.
    pub direction: f64,
    pub gait:      CrabGait,
    /// Frames left in the current gait.
    pub timer:     u32,
}

impl Crab {
    fn spawn(rng: &mut SimRng, bounds: Bounds) -> Self {
        Self {
            position:  Vec2::new(rng.gen_range(0.0..bounds.width), bounds.height),
            size:      rng.gen_range(10.0..15.0),
            direction: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
            gait:      CrabGait::Walking,
            timer:     rng.gen_range(CRAB_WALK_TICKS),
        }
    }

    /// One frame: tick the gait timer, walk, turn at a wall, then settle on
    /// the sand as given by `sand_y`.
    fn advance(&mut self, rng: &mut SimRng, width: f64, sand_y: impl Fn(f64) -> f64) {
        self.timer = self.timer.saturating_sub(1);
        if self.timer == 0 {
            (self.gait, self.timer) = match self.gait {
                CrabGait::Walking => (CrabGait::Waiting, rng.gen_range(CRAB_WAIT_TICKS)),
                CrabGait::Waiting => (CrabGait::Walking, rng.gen_range(CRAB_WALK_TICKS)),
            };
        }
        if self.gait == CrabGait::Walking {
            self.position.x += self.direction * CRAB_STEP;
        }

        let past_right = self.position.x > width && self.direction > 0.0;
        let past_left = self.position.x < 0.0 && self.direction < 0.0;
        if past_right || past_left {
            self.direction = -self.direction;
            self.gait = CrabGait::Walking;
            self.timer = rng.gen_range(CRAB_WALK_TICKS);
        }
        // Also pulls a crab back in after the tank shrank under it.
        self.position.x = self.position.x.clamp(0.0, width);
        self.position.y = sand_y(self.position.x) - CRAB_RIDE_HEIGHT;
    }

    /// Half-disc shell with three legs a side.
    pub(crate) fn paint<S: Surface + ?Sized>(&self, surface: &mut S) -> RenderResult<()> {
        let s = self.size;
        surface.translate(self.position.x, self.position.y)?;
        surface.set_fill(&Paint::Solid(CRAB_COLOR))?;
        surface.fill_path(&Path::new().arc(Vec2::ZERO, s, PI, 0.0).close())?;
        surface.set_stroke(CRAB_COLOR, 2.0);
        for i in 0..3 {
            let reach = (i as f64 * 0.5 + 0.2) * 10.0;
            for side in [-1.0, 1.0] {
                let leg = Path::new()
                    .move_to(Vec2::new(side * s, 0.0))
                    .line_to(Vec2::new(side * s * 1.5, reach));
                surface.stroke_path(&leg)?;
            }
        }
        Ok(())
    }
}

/// Height of the sand at `x` on `frame`: two slow sine waves around the
/// baseline `height * floor_level`.
pub fn sand_height(x: f64, height: f64, floor_level: f64, frame: u64) -> f64 {
    let t = frame as f64;
    let wave1 = (x * 0.005 + t * 0.01).sin() * 10.0;
    let wave2 = (x * 0.02 + t * 0.005).sin() * 5.0;
    height * floor_level + wave1 + wave2
}

// ── Scenery ───────────────────────────────────────────────────────────────────

pub struct Scenery {
    rays:        Vec<GodRay>,
    bubbles:     Vec<Bubble>,
    crabs:       Vec<Crab>,
    castle:      Castle,
    floor_level: f64,
    frame:       u64,
    rng:         SimRng,
}

impl Scenery {
    /// Seed from the world's master seed.  Ray count scales with width,
    /// between 3 and 20.  The castle's stones come from a separate stream so
    /// its look depends on the seed alone.
    pub fn new(seed: u64, bounds: Bounds, floor_level: f64) -> Self {
        let mut rng = SimRng::new(seed).child(SCENERY_STREAM);
        let castle = Castle::new(&mut SimRng::new(seed).child(CASTLE_STREAM));
        let placement = CastlePlacement::new(bounds, floor_level);

        let ray_count = (bounds.width / 200.0).clamp(3.0, 20.0).round() as usize;
        let rays = (0..ray_count)
            .map(|_| {
                let mut ray = GodRay::spawn(&mut rng, bounds);
                ray.life = rng.gen_range(0.0..ray.max_life);
                ray
            })
            .collect();

        // Spread the first bubbles over the water column above their source.
        let bubbles = (0..BUBBLE_COUNT)
            .map(|_| {
                let mut bubble = Bubble::spawn(&mut rng, placement);
                bubble.position.y = rng.gen_range(0.0..=bubble.position.y.max(0.0));
                bubble
            })
            .collect();

        let mut crabs: Vec<Crab> = (0..CRAB_COUNT).map(|_| Crab::spawn(&mut rng, bounds)).collect();
        for crab in &mut crabs {
            crab.position.y = sand_height(crab.position.x, bounds.height, floor_level, 0) - CRAB_RIDE_HEIGHT;
        }

        Self { rays, bubbles, crabs, castle, floor_level, frame: 0, rng }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn rays(&self) -> &[GodRay] {
        &self.rays
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn crabs(&self) -> &[Crab] {
        &self.crabs
    }

    pub fn castle(&self) -> &Castle {
        &self.castle
    }

    pub fn floor_level(&self) -> f64 {
        self.floor_level
    }

    pub fn castle_placement(&self, bounds: Bounds) -> CastlePlacement {
        CastlePlacement::new(bounds, self.floor_level)
    }

    /// Move every animated element one frame forward.  Rays that finished
    /// their life and bubbles that left the top are respawned; crabs walk.
    pub fn advance(&mut self, bounds: Bounds) {
        self.frame += 1;
        let placement = self.castle_placement(bounds);
        for ray in &mut self.rays {
            ray.life += 1.0;
            if ray.life >= ray.max_life {
                *ray = GodRay::spawn(&mut self.rng, bounds);
            }
        }
        for bubble in &mut self.bubbles {
            bubble.advance();
            if bubble.position.y < -bubble.radius {
                *bubble = Bubble::spawn(&mut self.rng, placement);
            }
        }
        let (frame, level) = (self.frame, self.floor_level);
        for crab in &mut self.crabs {
            crab.advance(&mut self.rng, bounds.width, |x| sand_height(x, bounds.height, level, frame));
        }
    }

    /// Height of the sand at `x` on the current frame.
    pub fn seafloor_y(&self, x: f64, height: f64) -> f64 {
        sand_height(x, height, self.floor_level, self.frame)
    }

    pub(crate) fn paint_background<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        bounds: Bounds,
    ) -> RenderResult<()> {
        surface.set_fill(&Paint::vertical(bounds.height, WATER_TOP, WATER_BOTTOM))?;
        surface.fill_rect(0.0, 0.0, bounds.width, bounds.height)
    }

    pub(crate) fn paint_castle<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        bounds: Bounds,
    ) -> RenderResult<()> {
        self.castle.paint(surface, self.castle_placement(bounds))
    }

    pub(crate) fn paint_seafloor<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        bounds: Bounds,
    ) -> RenderResult<()> {
        let (w, h) = (bounds.width, bounds.height);
        let mut sand = Path::new().move_to(Vec2::new(0.0, h * self.floor_level));
        let mut x = 0.0;
        while x < w + FLOOR_STEP_PX {
            sand = sand.line_to(Vec2::new(x, self.seafloor_y(x, h)));
            x += FLOOR_STEP_PX;
        }
        let sand = sand.line_to(Vec2::new(w, h)).line_to(Vec2::new(0.0, h)).close();
        surface.set_fill(&Paint::Solid(SAND))?;
        surface.fill_path(&sand)
    }
}
