//! Backend-neutral path description.

use std::f64::consts::TAU;

use aq_core::Vec2;

/// One path-building command, mirroring the canvas 2D path API.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathOp {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Circular arc around `center` from `start` to `end` radians.
    Arc { center: Vec2, radius: f64, start: f64, end: f64 },
    /// Full axis-aligned ellipse.
    Ellipse { center: Vec2, rx: f64, ry: f64 },
    Close,
}

/// A sequence of [`PathOp`]s, built fluently.
///
/// ```rust,ignore
/// let tri = Path::new()
///     .move_to(Vec2::new(0.0, 0.0))
///     .line_to(Vec2::new(10.0, 0.0))
///     .line_to(Vec2::new(5.0, 8.0))
///     .close();
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    ops: Vec<PathOp>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circle(center: Vec2, radius: f64) -> Self {
        Self::new().arc(center, radius, 0.0, TAU)
    }

    /// Closed axis-aligned rectangle with its top-left corner at `(x, y)`.
    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new()
            .move_to(Vec2::new(x, y))
            .line_to(Vec2::new(x + w, y))
            .line_to(Vec2::new(x + w, y + h))
            .line_to(Vec2::new(x, y + h))
            .close()
    }

    pub fn move_to(mut self, p: Vec2) -> Self {
        self.ops.push(PathOp::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Vec2) -> Self {
        self.ops.push(PathOp::LineTo(p));
        self
    }

    pub fn arc(mut self, center: Vec2, radius: f64, start: f64, end: f64) -> Self {
        self.ops.push(PathOp::Arc { center, radius, start, end });
        self
    }

    pub fn ellipse(mut self, center: Vec2, rx: f64, ry: f64) -> Self {
        self.ops.push(PathOp::Ellipse { center, rx, ry });
        self
    }

    pub fn close(mut self) -> Self {
        self.ops.push(PathOp::Close);
        self
    }

    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// `true` when every coordinate and radius is finite and every radius is
    /// non-negative.  Canvas backends throw on negative radii.
    pub fn is_drawable(&self) -> bool {
        self.ops.iter().all(|op| match *op {
            PathOp::MoveTo(p) | PathOp::LineTo(p) => p.is_finite(),
            PathOp::Arc { center, radius, start, end } => {
                center.is_finite() && radius.is_finite() && radius >= 0.0
                    && start.is_finite() && end.is_finite()
            }
            PathOp::Ellipse { center, rx, ry } => {
                center.is_finite() && rx.is_finite() && ry.is_finite() && rx >= 0.0 && ry >= 0.0
            }
            PathOp::Close => true,
        })
    }
}
