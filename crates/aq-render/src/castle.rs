//! The cobblestone castle on the seafloor.
//!
//! Drawn in castle-local coordinates: the origin is the middle of the base,
//! +y points down, and the whole castle spans roughly `x ∈ [-140, 120]`,
//! `y ∈ [-135, 0]`.  [`CastlePlacement`] maps it into the tank.
//!
//! The stone pattern is generated once per seed, so the walls do not shimmer
//! between frames.  Every wall block is clipped to its outline and shows the
//! part of the shared stone grid that falls inside it.

use std::f64::consts::PI;

use aq_core::{Bounds, SimRng, Vec2};

use crate::{Color, Paint, Path, RenderResult, Surface};

const STONE_COLORS: [Color; 3] = [
    Color::rgb(0x6c, 0x75, 0x7d),
    Color::rgb(0x60, 0x68, 0x6f),
    Color::rgb(0x78, 0x80, 0x88),
];
const MORTAR: Color = Color::rgb(0x21, 0x25, 0x29);
const MORTAR_WIDTH: f64 = 2.0;

const STONE_HEIGHT: f64 = 10.0;
const STONE_WIDTH: (f64, f64) = (15.0, 25.0);
/// Largest offset of a stone's fill or outline from its grid slot.
const STONE_JITTER: f64 = 1.0;
/// Local extent covered by the stone grid.
const GRID_X: (f64, f64) = (-150.0, 150.0);
const GRID_Y: (f64, f64) = (-200.0, 10.0);

/// Castle base below the sand line, as a fraction of the tank height.
const BASE_SINK: f64 = 0.05;

/// Local points bubbles rise from: the small arch and the top of the keep.
pub const BUBBLE_SOURCES: [(f64, f64); 2] = [(-80.0, -30.0), (35.0, -135.0)];

// ── Layout ────────────────────────────────────────────────────────────────────

enum Block {
    Rect { x: f64, y: f64, w: f64, h: f64 },
    Outline(&'static [(f64, f64)]),
}

const BLOCKS: [Block; 5] = [
    Block::Rect { x: -140.0, y: -60.0, w: 40.0, h: 60.0 },
    Block::Rect { x: 10.0, y: -130.0, w: 60.0, h: 130.0 },
    Block::Rect { x: 70.0, y: -100.0, w: 50.0, h: 100.0 },
    Block::Outline(&[(-100.0, 0.0), (-100.0, -80.0), (-50.0, -90.0), (10.0, -85.0), (10.0, 0.0)]),
    Block::Outline(&[
        (-50.0, -90.0),
        (-50.0, -110.0),
        (-40.0, -125.0),
        (-30.0, -115.0),
        (-20.0, -120.0),
        (-20.0, -88.0),
    ]),
];

/// `(x, y, width, merlons)`: every other merlon is raised.
const BATTLEMENTS: [(f64, f64, f64, usize); 4] = [
    (-140.0, -60.0, 40.0, 4),
    (-90.0, -85.0, 40.0, 4),
    (10.0, -130.0, 60.0, 5),
    (70.0, -100.0, 50.0, 4),
];

/// `(x, y, width, height)` of the dark arched windows, bottom-left anchored.
const ARCHES: [(f64, f64, f64, f64); 2] = [(-90.0, -20.0, 25.0, 30.0), (80.0, -10.0, 30.0, 40.0)];

const GATE_HALF_WIDTH: f64 = 40.0;
const GATE_HEIGHT: f64 = 50.0;

impl Block {
    fn path(&self) -> Path {
        match *self {
            Block::Rect { x, y, w, h } => Path::rect(x, y, w, h),
            Block::Outline(points) => {
                let mut path = Path::new();
                for (i, &(x, y)) in points.iter().enumerate() {
                    let p = Vec2::new(x, y);
                    path = if i == 0 { path.move_to(p) } else { path.line_to(p) };
                }
                path.close()
            }
        }
    }

    /// `(min, max)` corners of the block's bounding box.
    fn extent(&self) -> (Vec2, Vec2) {
        match *self {
            Block::Rect { x, y, w, h } => (Vec2::new(x, y), Vec2::new(x + w, y + h)),
            Block::Outline(points) => points.iter().fold(
                (Vec2::new(f64::INFINITY, f64::INFINITY), Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY)),
                |(lo, hi), &(x, y)| {
                    (Vec2::new(lo.x.min(x), lo.y.min(y)), Vec2::new(hi.x.max(x), hi.y.max(y)))
                },
            ),
        }
    }
}

// ── CastlePlacement ───────────────────────────────────────────────────────────

/// Where the castle stands in a tank of a given size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CastlePlacement {
    /// Middle of the base, in tank pixels.
    pub origin: Vec2,
    /// Local units to pixels.  Grows with tank height, never below `0.75`.
    pub scale:  f64,
}

impl CastlePlacement {
    pub fn new(bounds: Bounds, floor_level: f64) -> Self {
        let base = bounds.height * (floor_level + BASE_SINK).min(1.0);
        Self {
            origin: Vec2::new(bounds.width * 0.5, base),
            scale:  (bounds.height / 1000.0).max(0.5) * 1.5,
        }
    }

    #[inline]
    pub fn to_tank(&self, local: Vec2) -> Vec2 {
        self.origin + local * self.scale
    }
}

// ── Castle ────────────────────────────────────────────────────────────────────

/// One cobblestone in local coordinates.  Fill and outline are jittered
/// independently, like hand-laid stone.
#[derive(Clone, Debug, PartialEq)]
pub struct Stone {
    pub fill_at:   Vec2,
    pub stroke_at: Vec2,
    pub width:     f64,
    pub color:     Color,
}

impl Stone {
    fn overlaps(&self, lo: Vec2, hi: Vec2) -> bool {
        let left = self.fill_at.x.min(self.stroke_at.x);
        let top = self.fill_at.y.min(self.stroke_at.y);
        let right = self.fill_at.x.max(self.stroke_at.x) + self.width;
        let bottom = self.fill_at.y.max(self.stroke_at.y) + STONE_HEIGHT;
        left < hi.x && right > lo.x && top < hi.y && bottom > lo.y
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Castle {
    stones: Vec<Stone>,
}

impl Castle {
    /// Lay the stone grid from `rng`.  Odd courses are staggered by half a
    /// stone height.
    pub fn new(rng: &mut SimRng) -> Self {
        let mut stones = Vec::new();
        let mut row = 0usize;
        let mut y = GRID_Y.0;
        while y < GRID_Y.1 {
            let mut x = GRID_X.0 - if row % 2 == 1 { STONE_HEIGHT } else { 0.0 };
            while x < GRID_X.1 {
                let width = rng.gen_range(STONE_WIDTH.0..STONE_WIDTH.1);
                let color = STONE_COLORS[rng.gen_range(0..STONE_COLORS.len())];
                let mut jitter = || rng.gen_range(-STONE_JITTER..STONE_JITTER);
                let fill_at = Vec2::new(x + jitter(), y + jitter());
                let stroke_at = Vec2::new(x + jitter(), y + jitter());
                stones.push(Stone { fill_at, stroke_at, width, color });
                x += width;
            }
            y += STONE_HEIGHT;
            row += 1;
        }
        Self { stones }
    }

    pub fn stones(&self) -> &[Stone] {
        &self.stones
    }

    /// Paint the whole castle.  The caller owns the surrounding
    /// `save`/`restore`.
    pub(crate) fn paint<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        placement: CastlePlacement,
    ) -> RenderResult<()> {
        surface.translate(placement.origin.x, placement.origin.y)?;
        surface.scale(placement.scale, placement.scale)?;
        surface.set_stroke(MORTAR, MORTAR_WIDTH);

        for block in &BLOCKS {
            surface.save();
            let result = self.paint_block(surface, block);
            surface.restore();
            result?;
        }

        for &(x, y, w, merlons) in &BATTLEMENTS {
            paint_battlement(surface, x, y, w, merlons)?;
        }

        surface.set_fill(&Paint::Solid(MORTAR))?;
        for &(x, y, w, h) in &ARCHES {
            let r = w / 2.0;
            let arch = Path::new()
                .move_to(Vec2::new(x, y))
                .line_to(Vec2::new(x, y - h))
                .arc(Vec2::new(x + r, y - h), r, PI, 0.0)
                .line_to(Vec2::new(x + w, y))
                .close();
            surface.fill_path(&arch)?;
        }

        surface.fill_path(&Path::rect(-GATE_HALF_WIDTH, -GATE_HEIGHT, 2.0 * GATE_HALF_WIDTH, GATE_HEIGHT))?;
        surface.fill_path(&Path::new().arc(Vec2::new(0.0, -GATE_HEIGHT), GATE_HALF_WIDTH, PI, 0.0))
    }

    fn paint_block<S: Surface + ?Sized>(&self, surface: &mut S, block: &Block) -> RenderResult<()> {
        let outline = block.path();
        surface.stroke_path(&outline)?;
        surface.clip(&outline)?;
        let (lo, hi) = block.extent();
        for stone in self.stones.iter().filter(|s| s.overlaps(lo, hi)) {
            surface.set_fill(&Paint::Solid(stone.color))?;
            surface.fill_rect(stone.fill_at.x, stone.fill_at.y, stone.width, STONE_HEIGHT)?;
            surface.stroke_path(&Path::rect(stone.stroke_at.x, stone.stroke_at.y, stone.width, STONE_HEIGHT))?;
        }
        Ok(())
    }
}

fn paint_battlement<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    w: f64,
    merlons: usize,
) -> RenderResult<()> {
    let merlon_w = w / merlons as f64;
    let merlon_h = merlon_w * 0.8;
    surface.set_fill(&Paint::Solid(STONE_COLORS[0]))?;
    for i in (0..merlons).step_by(2) {
        let merlon = Path::rect(x + i as f64 * merlon_w, y - merlon_h, merlon_w, merlon_h);
        surface.fill_path(&merlon)?;
        surface.stroke_path(&merlon)?;
    }
    Ok(())
}
