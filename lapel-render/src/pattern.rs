use lapel_core::{LapelError, Result};
use tiny_skia::{Pixmap, Transform};

use crate::raster::svg_options;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Decodes a pattern asset (PNG, or SVG rasterised at its intrinsic size)
/// into a tile for the lapel fill.
pub fn decode_pattern(pattern: &str, bytes: &[u8]) -> Result<Pixmap> {
    let failed = |reason: String| LapelError::ImageLoadFailure {
        pattern: pattern.to_string(),
        reason,
    };
    if bytes.starts_with(PNG_SIGNATURE) {
        return Pixmap::decode_png(bytes).map_err(|e| failed(e.to_string()));
    }
    let tree = usvg::Tree::from_data(bytes, &svg_options()).map_err(|e| failed(e.to_string()))?;
    let size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(size.width(), size.height())
        .ok_or_else(|| failed(format!("empty image {}x{}", size.width(), size.height())))?;
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
    Ok(pixmap)
}
