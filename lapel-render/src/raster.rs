use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use lapel_core::{LapelError, Result};
use png::{BitDepth, ColorType, Compression, Encoder, Filter};
use tiny_skia::{Pixmap, Transform};
use tracing::debug;

/// SVG parsing options with the embedded face as the generic sans-serif and
/// serif family. Falls back to system fonts when nothing was embedded.
pub(crate) fn svg_options() -> usvg::Options<'static> {
    let mut opt = usvg::Options::default();
    let mut fontdb = usvg::fontdb::Database::new();
    if fonts::is_embedded() {
        fontdb.load_font_data(fonts::FONT_BYTES.to_vec());
    } else {
        debug!("no embedded font, loading system fonts");
        fontdb.load_system_fonts();
    }
    let family_name = fontdb
        .faces()
        .next()
        .and_then(|face| face.families.first().map(|(n, _)| n.clone()));
    if let Some(name) = family_name {
        fontdb.set_sans_serif_family(name.clone());
        fontdb.set_serif_family(name);
    }
    opt.fontdb = Arc::new(fontdb);
    opt
}

/// Rasterises an SVG document onto a `width`×`height` pixmap.
pub fn render_svg(svg: &str, width: u32, height: u32) -> Result<Pixmap> {
    let tree = usvg::Tree::from_str(svg, &svg_options())
        .map_err(|e| LapelError::RenderingUnavailable(format!("svg parse error: {e:?}")))?;
    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
        LapelError::RenderingUnavailable(format!("pixmap alloc failed for {width}x{height}"))
    })?;
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
    Ok(pixmap)
}

/// PNG bytes for `pixmap`, with fixed filter and compression so equal
/// pixmaps always encode to equal bytes.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut enc = Encoder::new(&mut buf, pixmap.width(), pixmap.height());
    enc.set_color(ColorType::Rgba);
    enc.set_depth(BitDepth::Eight);
    // set_compression also picks a filter, so the filter goes second.
    enc.set_compression(Compression::Fast);
    enc.set_filter(Filter::NoFilter);
    {
        let mut writer = enc.write_header().map_err(encode_error)?;
        writer.write_image_data(pixmap.data()).map_err(encode_error)?;
    }
    Ok(buf)
}

fn encode_error(e: png::EncodingError) -> LapelError {
    LapelError::RenderingUnavailable(format!("png encode: {e}"))
}

/// `data:image/png;base64,...`
pub fn png_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

/// Escapes text for use inside SVG element content.
pub(crate) fn svg_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_is_stable() {
        let mut pm = Pixmap::new(8, 4).unwrap();
        pm.fill(tiny_skia::Color::from_rgba8(10, 20, 30, 255));
        let a = encode_png(&pm).unwrap();
        let b = encode_png(&pm).unwrap();
        assert_eq!(a, b);
        assert_eq!(&a[1..4], b"PNG");
    }

    fn gradient() -> Pixmap {
        let mut pm = Pixmap::new(64, 8).unwrap();
        for (i, px) in pm.pixels_mut().iter_mut().enumerate() {
            let v = (i % 64) as u8 * 4;
            *px = tiny_skia::PremultipliedColorU8::from_rgba(v, v, v, 255).unwrap();
        }
        pm
    }

    fn encode_with(pixmap: &Pixmap, filter: Filter) -> Vec<u8> {
        let mut buf = Vec::new();
        let mut enc = Encoder::new(&mut buf, pixmap.width(), pixmap.height());
        enc.set_color(ColorType::Rgba);
        enc.set_depth(BitDepth::Eight);
        enc.set_compression(Compression::Fast);
        enc.set_filter(filter);
        enc.write_header()
            .unwrap()
            .write_image_data(pixmap.data())
            .unwrap();
        buf
    }

    #[test]
    fn scanlines_are_written_unfiltered() {
        let pm = gradient();
        let bytes = encode_png(&pm).unwrap();
        assert_eq!(bytes, encode_with(&pm, Filter::NoFilter));
        assert_ne!(bytes, encode_with(&pm, Filter::Adaptive));
    }

    #[test]
    fn data_url_prefix() {
        assert_eq!(png_data_url(&[0, 1, 2]), "data:image/png;base64,AAEC");
    }

    #[test]
    fn escaping() {
        assert_eq!(svg_escape("a<b & c>"), "a&lt;b &amp; c&gt;");
    }

    #[test]
    fn broken_svg_is_rendering_unavailable() {
        let err = render_svg("<svg", 10, 10).unwrap_err();
        assert!(matches!(err, LapelError::RenderingUnavailable(_)));
    }

    #[test]
    fn zero_sized_canvas_is_rendering_unavailable() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1"></svg>"#;
        assert!(matches!(
            render_svg(svg, 0, 10),
            Err(LapelError::RenderingUnavailable(_))
        ));
    }
}
