//! The frame renderer.

use aq_core::{Bounds, FishId, FoodId, Vec2};
use aq_entity::{EntityStore, Fish, Food};

use crate::{Color, Paint, Path, RenderError, RenderResult, Scenery, Surface};

pub const FOOD_COLOR: Color = Color::rgb(0xf0, 0xe6, 0x8c);
pub const FOOD_RADIUS: f64 = 3.0;

const FISH_SATURATION: f64 = 80.0;
const FISH_LIGHTNESS: f64 = 70.0;

/// What a skipped draw was for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntityRef {
    Background,
    GodRay(usize),
    Castle,
    Seafloor,
    Bubble(usize),
    Crab(usize),
    Food(FoodId),
    Fish(FishId),
}

/// A layer or entity left out of the frame, with the reason.
#[derive(Clone, Debug, PartialEq)]
pub struct Skipped {
    pub what:  EntityRef,
    pub error: RenderError,
}

/// Summary of one [`Renderer::render`] call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub frame:      u64,
    pub fish_drawn: usize,
    pub food_drawn: usize,
    pub skipped:    Vec<Skipped>,
}

impl FrameReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Record the outcome of one draw.  Returns `true` if it succeeded.
    fn settle(&mut self, what: EntityRef, result: RenderResult<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(frame = self.frame, entity = ?what, %error, "draw skipped");
                self.skipped.push(Skipped { what, error });
                false
            }
        }
    }
}

/// The body colour of a fish.
pub fn fish_color(fish: &Fish) -> Color {
    Color::hsl(fish.hue, FISH_SATURATION, FISH_LIGHTNESS)
}

/// Paints the tank.  Read-only with respect to entities.
pub struct Renderer {
    scenery: Scenery,
}

impl Renderer {
    /// `floor_level` places the sand line, as a fraction of the tank height.
    pub fn new(seed: u64, bounds: Bounds, floor_level: f64) -> Self {
        Self { scenery: Scenery::new(seed, bounds, floor_level) }
    }

    pub fn scenery(&self) -> &Scenery {
        &self.scenery
    }

    /// Advance the scenery one frame and paint everything.
    ///
    /// Never fails as a whole.  Each layer and entity is drawn inside its own
    /// `save`/`restore` pair; a failure is logged and recorded in the
    /// report, and painting continues with the next one.
    pub fn render<S: Surface + ?Sized>(
        &mut self,
        store: &EntityStore,
        bounds: Bounds,
        surface: &mut S,
    ) -> FrameReport {
        self.scenery.advance(bounds);
        let mut report = FrameReport { frame: self.scenery.frame(), ..FrameReport::default() };
        let scenery = &self.scenery;

        let r = isolated(surface, |s| scenery.paint_background(s, bounds));
        report.settle(EntityRef::Background, r);

        for (i, ray) in scenery.rays().iter().enumerate() {
            let r = isolated(surface, |s| ray.paint(s));
            report.settle(EntityRef::GodRay(i), r);
        }

        let r = isolated(surface, |s| scenery.paint_castle(s, bounds));
        report.settle(EntityRef::Castle, r);

        let r = isolated(surface, |s| scenery.paint_seafloor(s, bounds));
        report.settle(EntityRef::Seafloor, r);

        for (i, bubble) in scenery.bubbles().iter().enumerate() {
            let r = isolated(surface, |s| bubble.paint(s));
            report.settle(EntityRef::Bubble(i), r);
        }

        for (i, crab) in scenery.crabs().iter().enumerate() {
            let r = isolated(surface, |s| crab.paint(s));
            report.settle(EntityRef::Crab(i), r);
        }

        for food in store.foods() {
            let r = isolated(surface, |s| paint_food(s, food));
            if report.settle(EntityRef::Food(food.id()), r) {
                report.food_drawn += 1;
            }
        }

        for fish in store.fish() {
            let r = isolated(surface, |s| paint_fish(s, fish));
            if report.settle(EntityRef::Fish(fish.id()), r) {
                report.fish_drawn += 1;
            }
        }

        report
    }
}

/// Run `draw` between `save` and `restore`, restoring on failure too.
fn isolated<S, F>(surface: &mut S, draw: F) -> RenderResult<()>
where
    S: Surface + ?Sized,
    F: FnOnce(&mut S) -> RenderResult<()>,
{
    surface.save();
    let result = draw(surface);
    surface.restore();
    result
}

fn paint_food<S: Surface + ?Sized>(surface: &mut S, food: &Food) -> RenderResult<()> {
    if !food.position.is_finite() {
        return Err(RenderError::NonFinite { what: "food position" });
    }
    surface.set_fill(&Paint::Solid(FOOD_COLOR))?;
    surface.fill_path(&Path::circle(food.position, FOOD_RADIUS))
}

/// Forked tail, elliptical body, white eye with a black pupil; drawn in body
/// space (+x forward) and rotated to the heading.
fn paint_fish<S: Surface + ?Sized>(surface: &mut S, fish: &Fish) -> RenderResult<()> {
    if !fish.position.is_finite() {
        return Err(RenderError::NonFinite { what: "fish position" });
    }
    if !fish.heading.is_finite() {
        return Err(RenderError::NonFinite { what: "fish heading" });
    }
    if !fish.size.is_finite() {
        return Err(RenderError::NonFinite { what: "fish size" });
    }
    let s = fish.size.max(0.0);

    surface.translate(fish.position.x, fish.position.y)?;
    surface.rotate(fish.heading)?;
    surface.set_fill(&Paint::Solid(fish_color(fish)))?;

    let tail = Path::new()
        .move_to(Vec2::new(-s * 0.9, 0.0))
        .line_to(Vec2::new(-s * 1.5, -s * 0.6))
        .line_to(Vec2::new(-s * 1.4, 0.0))
        .line_to(Vec2::new(-s * 1.5, s * 0.6))
        .close();
    surface.fill_path(&tail)?;
    surface.fill_path(&Path::new().ellipse(Vec2::ZERO, s, s * 0.6))?;

    surface.set_fill(&Paint::Solid(Color::WHITE))?;
    surface.fill_path(&Path::circle(Vec2::new(s * 0.6, 0.0), s * 0.15))?;
    surface.set_fill(&Paint::Solid(Color::BLACK))?;
    surface.fill_path(&Path::circle(Vec2::new(s * 0.65, 0.0), s * 0.08))
}
