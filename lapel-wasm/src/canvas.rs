use std::f64::consts::TAU;

use lapel_core::{DrawingSurface, Path, PathCommand, Point, Rgb};
use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Path2d};

// Non-deprecated helpers to set canvas styles via property assignment.
pub fn set_fill_style(ctx: &CanvasRenderingContext2d, style: &JsValue) {
    let _ = js_sys::Reflect::set(ctx.as_ref(), &JsValue::from_str("fillStyle"), style);
}

pub fn set_stroke_style(ctx: &CanvasRenderingContext2d, style: &JsValue) {
    let _ = js_sys::Reflect::set(ctx.as_ref(), &JsValue::from_str("strokeStyle"), style);
}

fn color(c: Rgb) -> JsValue {
    JsValue::from_str(&c.to_hex())
}

fn to_path2d(path: &Path) -> Option<Path2d> {
    let p = Path2d::new().ok()?;
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(pt) => p.move_to(pt.x, pt.y),
            PathCommand::LineTo(pt) => p.line_to(pt.x, pt.y),
            PathCommand::QuadTo(c, pt) => p.quadratic_curve_to(c.x, c.y, pt.x, pt.y),
            PathCommand::Close => p.close_path(),
        }
    }
    Some(p)
}

/// The preview `<canvas>` as a drawing surface. Pattern tiles are the
/// loaded `<img>` elements.
pub struct CanvasSurface<'a> {
    canvas: &'a HtmlCanvasElement,
    ctx: &'a CanvasRenderingContext2d,
}

impl<'a> CanvasSurface<'a> {
    pub fn new(canvas: &'a HtmlCanvasElement, ctx: &'a CanvasRenderingContext2d) -> Self {
        CanvasSurface { canvas, ctx }
    }

    fn circle(&self, center: Point, radius: f64) -> bool {
        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, radius, 0.0, TAU).is_ok()
    }
}

impl DrawingSurface for CanvasSurface<'_> {
    type Pattern = HtmlImageElement;

    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn fill_background(&mut self, c: Rgb) {
        let (w, h) = self.size();
        set_fill_style(self.ctx, &color(c));
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn fill_path(&mut self, path: &Path, c: Rgb) {
        if let Some(p) = to_path2d(path) {
            set_fill_style(self.ctx, &color(c));
            self.ctx.fill_with_path_2d(&p);
        }
    }

    fn fill_path_with_pattern(&mut self, path: &Path, image: &HtmlImageElement) {
        let pattern = match self.ctx.create_pattern_with_html_image_element(image, "repeat") {
            Ok(Some(pattern)) => pattern,
            _ => {
                debug!("canvas refused to build a pattern from the image");
                return;
            }
        };
        if let Some(p) = to_path2d(path) {
            set_fill_style(self.ctx, pattern.as_ref());
            self.ctx.fill_with_path_2d(&p);
        }
    }

    fn stroke_path(&mut self, path: &Path, c: Rgb, width: f64) {
        if let Some(p) = to_path2d(path) {
            set_stroke_style(self.ctx, &color(c));
            self.ctx.set_line_width(width);
            self.ctx.stroke_with_path(&p);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, c: Rgb) {
        if self.circle(center, radius) {
            set_fill_style(self.ctx, &color(c));
            self.ctx.fill();
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, c: Rgb, width: f64) {
        if self.circle(center, radius) {
            set_stroke_style(self.ctx, &color(c));
            self.ctx.set_line_width(width);
            self.ctx.stroke();
        }
    }
}
