//! The `Surface` trait implemented by drawing backends.

use crate::{Color, Paint, Path, RenderResult};

/// A 2D immediate-mode drawing surface.
///
/// Implemented by the browser canvas backend in the web facade and by
/// [`RecordingSurface`][crate::RecordingSurface] for tests and headless runs.
/// Every call may fail; the renderer treats a failure as affecting only the
/// layer or entity being drawn.
///
/// State calls (`save`/`restore`, transforms, clip, fill and stroke styles, blur)
/// follow canvas semantics: they persist until changed or restored.
pub trait Surface {
    /// Current pixel size as `(width, height)`.  May be zero while the host
    /// element is hidden.
    fn dimensions(&self) -> (f64, f64);

    fn save(&mut self);

    fn restore(&mut self);

    fn translate(&mut self, dx: f64, dy: f64) -> RenderResult<()>;

    fn rotate(&mut self, radians: f64) -> RenderResult<()>;

    /// Scales subsequent drawing, line widths included.
    fn scale(&mut self, sx: f64, sy: f64) -> RenderResult<()>;

    /// Intersect the clip region with `path` until the next `restore`.
    fn clip(&mut self, path: &Path) -> RenderResult<()>;

    /// Gaussian blur radius in pixels applied to subsequent fills.  `0`
    /// disables it.
    fn set_blur(&mut self, px: f64);

    fn set_fill(&mut self, paint: &Paint) -> RenderResult<()>;

    fn set_stroke(&mut self, color: Color, line_width: f64);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> RenderResult<()>;

    fn fill_path(&mut self, path: &Path) -> RenderResult<()>;

    fn stroke_path(&mut self, path: &Path) -> RenderResult<()>;
}
