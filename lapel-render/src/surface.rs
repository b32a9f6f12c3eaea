use lapel_core::constants::{PREVIEW_HEIGHT, PREVIEW_WIDTH};
use lapel_core::{DrawingSurface, LapelConfig, LapelError, Path, PathCommand, Point, Result, Rgb};
use tiny_skia::{
    Color, FillRule, FilterQuality, Paint, PathBuilder, Pixmap, SpreadMode, Stroke, Transform,
};

use crate::raster::encode_png;

/// Off-screen preview surface backed by a tiny-skia pixmap.
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            LapelError::RenderingUnavailable(format!("pixmap alloc failed for {width}x{height}"))
        })?;
        Ok(PixmapSurface { pixmap })
    }

    /// The standard 400×300 preview.
    pub fn preview() -> Result<Self> {
        Self::new(PREVIEW_WIDTH, PREVIEW_HEIGHT)
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

fn solid(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = true;
    paint
}

fn to_skia(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathCommand::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathCommand::QuadTo(c, p) => {
                pb.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32)
            }
            PathCommand::Close => pb.close(),
        }
    }
    pb.finish()
}

fn circle(center: Point, radius: f64) -> Option<tiny_skia::Path> {
    PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32)
}

fn stroke(width: f64) -> Stroke {
    Stroke {
        width: width as f32,
        ..Default::default()
    }
}

impl DrawingSurface for PixmapSurface {
    type Pattern = Pixmap;

    fn size(&self) -> (f64, f64) {
        (self.pixmap.width() as f64, self.pixmap.height() as f64)
    }

    fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    fn fill_background(&mut self, color: Rgb) {
        self.pixmap
            .fill(Color::from_rgba8(color.r, color.g, color.b, 255));
    }

    fn fill_path(&mut self, path: &Path, color: Rgb) {
        if let Some(p) = to_skia(path) {
            self.pixmap
                .fill_path(&p, &solid(color), FillRule::Winding, Transform::identity(), None);
        }
    }

    fn fill_path_with_pattern(&mut self, path: &Path, pattern: &Pixmap) {
        let Some(p) = to_skia(path) else { return };
        let mut paint = Paint::default();
        paint.anti_alias = true;
        paint.shader = tiny_skia::Pattern::new(
            pattern.as_ref(),
            SpreadMode::Repeat,
            FilterQuality::Nearest,
            1.0,
            Transform::identity(),
        );
        self.pixmap
            .fill_path(&p, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn stroke_path(&mut self, path: &Path, color: Rgb, width: f64) {
        if let Some(p) = to_skia(path) {
            self.pixmap
                .stroke_path(&p, &solid(color), &stroke(width), Transform::identity(), None);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) {
        if let Some(p) = circle(center, radius) {
            self.pixmap
                .fill_path(&p, &solid(color), FillRule::Winding, Transform::identity(), None);
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgb, width: f64) {
        if let Some(p) = circle(center, radius) {
            self.pixmap
                .stroke_path(&p, &solid(color), &stroke(width), Transform::identity(), None);
        }
    }
}

/// Draws the interactive preview for `config` off-screen and encodes it.
pub fn render_preview_png(config: &LapelConfig, pattern: &Pixmap) -> Result<Vec<u8>> {
    let mut surface = PixmapSurface::preview()?;
    lapel_core::render_preview(&mut surface, config, pattern);
    encode_png(surface.pixmap())
}
