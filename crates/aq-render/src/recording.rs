//! An in-memory [`Surface`] that records every call.
//!
//! Used by the tests and the headless demo.  Fill operations carry the fill
//! style in effect when they were issued, so a test can ask "was anything
//! painted in this fish's colour?" without replaying the state stack.

use aq_core::Vec2;

use crate::{Color, Paint, Path, RenderError, RenderResult, Surface};

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f64),
    Scale(Vec2),
    Clip(Path),
    Blur(f64),
    SetFill(Paint),
    SetStroke { color: Color, line_width: f64 },
    FillRect { x: f64, y: f64, w: f64, h: f64, paint: Paint },
    FillPath { path: Path, paint: Paint },
    StrokePath { path: Path, color: Color },
}

type FaultFn = Box<dyn Fn(&DrawOp) -> bool>;

/// Recording backend with optional fault injection.
pub struct RecordingSurface {
    width:  f64,
    height: f64,
    ops:    Vec<DrawOp>,
    fill:   Paint,
    stroke: Color,
    stack:  Vec<(Paint, Color)>,
    fault:  Option<FaultFn>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops:    Vec::new(),
            fill:   Paint::Solid(Color::BLACK),
            stroke: Color::BLACK,
            stack:  Vec::new(),
            fault:  None,
        }
    }

    /// Make every fallible call whose op matches `pred` fail with
    /// [`RenderError::Backend`] instead of being recorded.
    pub fn fail_when(mut self, pred: impl Fn(&DrawOp) -> bool + 'static) -> Self {
        self.fault = Some(Box::new(pred));
        self
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drain the recorded ops, e.g. between frames.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Number of filled paths painted with exactly `paint`.
    pub fn fills_with(&self, paint: &Paint) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillPath { paint: p, .. } if p == paint))
            .count()
    }

    fn record(&mut self, op: DrawOp) -> RenderResult<()> {
        if let Some(fault) = &self.fault {
            if fault(&op) {
                return Err(RenderError::Backend(format!("injected failure on {op:?}")));
            }
        }
        self.ops.push(op);
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn save(&mut self) {
        self.stack.push((self.fill.clone(), self.stroke));
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        if let Some((fill, stroke)) = self.stack.pop() {
            self.fill = fill;
            self.stroke = stroke;
        }
        self.ops.push(DrawOp::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) -> RenderResult<()> {
        self.record(DrawOp::Translate(Vec2::new(dx, dy)))
    }

    fn rotate(&mut self, radians: f64) -> RenderResult<()> {
        self.record(DrawOp::Rotate(radians))
    }

    fn scale(&mut self, sx: f64, sy: f64) -> RenderResult<()> {
        self.record(DrawOp::Scale(Vec2::new(sx, sy)))
    }

    fn clip(&mut self, path: &Path) -> RenderResult<()> {
        if !path.is_drawable() {
            return Err(RenderError::NonFinite { what: "path coordinate" });
        }
        self.record(DrawOp::Clip(path.clone()))
    }

    fn set_blur(&mut self, px: f64) {
        self.ops.push(DrawOp::Blur(px));
    }

    fn set_fill(&mut self, paint: &Paint) -> RenderResult<()> {
        self.record(DrawOp::SetFill(paint.clone()))?;
        self.fill = paint.clone();
        Ok(())
    }

    fn set_stroke(&mut self, color: Color, line_width: f64) {
        self.stroke = color;
        self.ops.push(DrawOp::SetStroke { color, line_width });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> RenderResult<()> {
        let paint = self.fill.clone();
        self.record(DrawOp::FillRect { x, y, w, h, paint })
    }

    fn fill_path(&mut self, path: &Path) -> RenderResult<()> {
        if !path.is_drawable() {
            return Err(RenderError::NonFinite { what: "path coordinate" });
        }
        let paint = self.fill.clone();
        self.record(DrawOp::FillPath { path: path.clone(), paint })
    }

    fn stroke_path(&mut self, path: &Path) -> RenderResult<()> {
        if !path.is_drawable() {
            return Err(RenderError::NonFinite { what: "path coordinate" });
        }
        let color = self.stroke;
        self.record(DrawOp::StrokePath { path: path.clone(), color })
    }
}
