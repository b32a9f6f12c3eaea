use crate::geometry::{Path, Point};
use crate::palette::Rgb;

/// Minimal 2D drawing API the preview is written against.
///
/// Implemented by the browser canvas and by an off-screen pixmap. Drawing
/// calls cannot fail from the caller's point of view; back ends that can
/// fail internally drop the call.
pub trait DrawingSurface {
    /// A decoded pattern image, tiled at its native size.
    type Pattern;

    fn size(&self) -> (f64, f64);

    fn clear(&mut self);

    fn fill_background(&mut self, color: Rgb);

    fn fill_path(&mut self, path: &Path, color: Rgb);

    fn fill_path_with_pattern(&mut self, path: &Path, pattern: &Self::Pattern);

    fn stroke_path(&mut self, path: &Path, color: Rgb, width: f64);

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb);

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgb, width: f64);
}
