//! Browser entry point: an HTML canvas backend and the exported `Aquarium`
//! class.
//!
//! ```js
//! import init, { Aquarium } from "./pkg/aquarium.js";
//! await init();
//! const tank = new Aquarium("aquarium-canvas", { initial_fish: 20 });
//! canvas.addEventListener("click", (e) => tank.add_food(e.offsetX, e.offsetY));
//! (function frame() { tank.tick(); requestAnimationFrame(frame); })();
//! ```

use std::f64::consts::TAU;
use std::sync::Once;

use aq_core::{AqError, AqResult, AquariumConfig};
use aq_render::{Color, Paint, Path, PathOp, RenderError, RenderResult, Surface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::facade::{Aquarium, SurfaceHost};
use crate::shared::SharedAquarium;

// ── CanvasSurface ─────────────────────────────────────────────────────────────

/// A `<canvas>` element kept at the size of the browser window.
pub struct CanvasSurface {
    window: Window,
    canvas: HtmlCanvasElement,
    ctx:    CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Match the canvas to the window's inner size.  Assigning the size
    /// clears the canvas, so this only writes when something changed.
    fn fit_to_window(&self) {
        let inner = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let w = inner(self.window.inner_width()).max(0.0) as u32;
        let h = inner(self.window.inner_height()).max(0.0) as u32;
        if self.canvas.width() != w {
            self.canvas.set_width(w);
        }
        if self.canvas.height() != h {
            self.canvas.set_height(h);
        }
    }

    fn trace(&self, path: &Path) -> RenderResult<()> {
        self.ctx.begin_path();
        for op in path.ops() {
            match *op {
                PathOp::MoveTo(p) => self.ctx.move_to(p.x, p.y),
                PathOp::LineTo(p) => self.ctx.line_to(p.x, p.y),
                PathOp::Arc { center, radius, start, end } => {
                    self.ctx.arc(center.x, center.y, radius, start, end).map_err(backend)?
                }
                PathOp::Ellipse { center, rx, ry } => {
                    self.ctx.ellipse(center.x, center.y, rx, ry, 0.0, 0.0, TAU).map_err(backend)?
                }
                PathOp::Close => self.ctx.close_path(),
            }
        }
        Ok(())
    }
}

fn backend(err: JsValue) -> RenderError {
    RenderError::Backend(format!("{err:?}"))
}

impl Surface for CanvasSurface {
    fn dimensions(&self) -> (f64, f64) {
        self.fit_to_window();
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, dx: f64, dy: f64) -> RenderResult<()> {
        self.ctx.translate(dx, dy).map_err(backend)
    }

    fn rotate(&mut self, radians: f64) -> RenderResult<()> {
        self.ctx.rotate(radians).map_err(backend)
    }

    fn scale(&mut self, sx: f64, sy: f64) -> RenderResult<()> {
        self.ctx.scale(sx, sy).map_err(backend)
    }

    fn clip(&mut self, path: &Path) -> RenderResult<()> {
        if !path.is_drawable() {
            return Err(RenderError::NonFinite { what: "path coordinate" });
        }
        self.trace(path)?;
        self.ctx.clip();
        Ok(())
    }

    fn set_blur(&mut self, px: f64) {
        if px > 0.0 {
            self.ctx.set_filter(&format!("blur({px}px)"));
        } else {
            self.ctx.set_filter("none");
        }
    }

    fn set_fill(&mut self, paint: &Paint) -> RenderResult<()> {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_string()),
            Paint::LinearGradient { from, to, stops } => {
                let gradient = self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y);
                for (offset, color) in stops {
                    gradient.add_color_stop(*offset as f32, &color.to_string()).map_err(backend)?;
                }
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        Ok(())
    }

    fn set_stroke(&mut self, color: Color, line_width: f64) {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(line_width);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> RenderResult<()> {
        self.ctx.fill_rect(x, y, w, h);
        Ok(())
    }

    fn fill_path(&mut self, path: &Path) -> RenderResult<()> {
        if !path.is_drawable() {
            return Err(RenderError::NonFinite { what: "path coordinate" });
        }
        self.trace(path)?;
        self.ctx.fill();
        Ok(())
    }

    fn stroke_path(&mut self, path: &Path) -> RenderResult<()> {
        if !path.is_drawable() {
            return Err(RenderError::NonFinite { what: "path coordinate" });
        }
        self.trace(path)?;
        self.ctx.stroke();
        Ok(())
    }
}

impl Drop for CanvasSurface {
    fn drop(&mut self) {
        self.ctx.set_filter("none");
        self.ctx.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
    }
}

// ── CanvasHost ────────────────────────────────────────────────────────────────

/// Resolves canvas element ids in the current document.
#[derive(Default)]
pub struct CanvasHost;

impl SurfaceHost for CanvasHost {
    type Surface = CanvasSurface;

    fn acquire(&mut self, surface_id: &str) -> AqResult<CanvasSurface> {
        let not_found = || AqError::SurfaceNotFound(surface_id.to_owned());
        let window = web_sys::window().ok_or_else(not_found)?;
        let element = window
            .document()
            .and_then(|doc| doc.get_element_by_id(surface_id))
            .ok_or_else(not_found)?;
        let canvas = element.dyn_into::<HtmlCanvasElement>().map_err(|_| {
            AqError::Config(format!("element {surface_id:?} is not a canvas"))
        })?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| AqError::Config(format!("canvas {surface_id:?} has no 2d context")))?;

        let surface = CanvasSurface { window, canvas, ctx };
        surface.fit_to_window();
        Ok(surface)
    }
}

// ── JS class ──────────────────────────────────────────────────────────────────

/// Route panics to the browser console and `tracing` events to
/// `console.log`.  Safe to call any number of times.
pub fn install_diagnostics() {
    static INSTALLED: Once = Once::new();
    INSTALLED.call_once(|| {
        console_error_panic_hook::set_once();
        if tracing_wasm::try_set_as_global_default().is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
    });
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsError::new(&err.to_string()).into()
}

fn config_from_js(options: JsValue) -> Result<AquariumConfig, JsValue> {
    if options.is_null() || options.is_undefined() {
        return Ok(AquariumConfig::default());
    }
    serde_wasm_bindgen::from_value(options).map_err(js_error)
}

/// The aquarium as seen from JavaScript.
#[wasm_bindgen(js_name = Aquarium)]
pub struct WebAquarium {
    shared: SharedAquarium<CanvasHost>,
}

#[wasm_bindgen(js_class = Aquarium)]
impl WebAquarium {
    /// Bind to the canvas with id `canvas_id`.  `options` may override any
    /// tunable; `null` or omitted keeps the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, options: JsValue) -> Result<WebAquarium, JsValue> {
        install_diagnostics();
        let config = config_from_js(options)?;
        let aquarium = Aquarium::create(CanvasHost, config, canvas_id).map_err(|err| {
            tracing::error!(canvas = canvas_id, %err, "aquarium construction failed");
            js_error(err)
        })?;
        Ok(Self { shared: SharedAquarium::new(aquarium) })
    }

    /// Default tunables, for the common `Aquarium.create("tank")` call.
    pub fn create(canvas_id: &str) -> Result<WebAquarium, JsValue> {
        Self::new(canvas_id, JsValue::UNDEFINED)
    }

    pub fn add_food(&self, x: f64, y: f64) -> Result<(), JsValue> {
        self.shared.add_food(x, y).map(drop).map_err(js_error)
    }

    pub fn add_fish(&self, x: f64, y: f64) -> Result<(), JsValue> {
        self.shared.add_fish(x, y).map(drop).map_err(js_error)
    }

    /// Advance one step and draw.  Never throws.
    pub fn tick(&self) {
        self.shared.tick();
    }

    pub fn destroy(&self) {
        self.shared.destroy();
    }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        self.shared.inspect(|a| a.state_name()).unwrap_or("busy").to_owned()
    }

    #[wasm_bindgen(getter, js_name = fishCount)]
    pub fn fish_count(&self) -> usize {
        self.shared.inspect(|a| a.world().map_or(0, |w| w.store().fish_count())).unwrap_or(0)
    }

    #[wasm_bindgen(getter, js_name = foodCount)]
    pub fn food_count(&self) -> usize {
        self.shared.inspect(|a| a.world().map_or(0, |w| w.store().food_count())).unwrap_or(0)
    }
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(id: &str) {
        let document = web_sys::window().and_then(|w| w.document()).unwrap();
        let canvas = document.create_element("canvas").unwrap();
        canvas.set_id(id);
        document.body().unwrap().append_child(&canvas).unwrap();
    }

    #[wasm_bindgen_test]
    fn missing_canvas_is_reported() {
        assert!(WebAquarium::create("no-such-canvas").is_err());
    }

    #[wasm_bindgen_test]
    fn ticks_and_accepts_input() {
        mount("tank-smoke");
        let tank = WebAquarium::new("tank-smoke", JsValue::NULL).unwrap();
        let before = tank.fish_count();
        tank.add_fish(10.0, 10.0).unwrap();
        tank.add_food(12.0, 10.0).unwrap();
        tank.tick();
        assert_eq!(tank.fish_count(), before + 1);
        tank.destroy();
        assert_eq!(tank.state(), "released");
        assert!(tank.add_food(1.0, 1.0).is_err());
    }

    #[wasm_bindgen_test]
    fn diagnostics_install_once_across_instances() {
        install_diagnostics();
        install_diagnostics();
        mount("tank-a");
        mount("tank-b");
        let a = WebAquarium::create("tank-a").unwrap();
        let b = WebAquarium::create("tank-b").unwrap();
        a.tick();
        b.tick();
        assert_eq!(a.state(), "bound");
        assert_eq!(b.state(), "bound");
    }

    #[wasm_bindgen_test]
    fn version_matches_manifest() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
