//! Shareable export images.
//!
//! Both cards are plain SVG documents built from the configuration and then
//! rasterised. Nothing here reads a clock or a random source, so equal inputs
//! give equal PNG bytes.

use lapel_core::constants::{CARD_HEIGHT, CARD_WIDTH, PREVIEW_BACKGROUND, THUMBNAIL_SIZE};
use lapel_core::{Language, LapelConfig, Result, Text, pattern_by_id, t};
use tracing::{debug, info};

use crate::raster::{encode_png, png_data_url, render_svg, svg_escape};

const GRADIENT_TOP: &str = "#1f2937";
const GRADIENT_BOTTOM: &str = "#374151";
const ACCENT: &str = "#f97316";
const MUTED: &str = "#6b7280";

/// Texts and labels that vary per site rather than per design.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardOptions {
    pub language: Language,
    pub branding: String,
    pub year_label: String,
}

impl Default for CardOptions {
    fn default() -> Self {
        CardOptions {
            language: Language::Ru,
            branding: "Made in EU".to_string(),
            year_label: "© 2024".to_string(),
        }
    }
}

/// Social card (1200×630): gradient, title, subtitle, pattern name, the
/// configuration summary, fixed ornaments and corner branding.
pub fn build_social_card_svg(
    config: &LapelConfig,
    pattern_name: &str,
    options: &CardOptions,
) -> String {
    let (w, h) = (CARD_WIDTH as f64, CARD_HEIGHT as f64);
    let cx = w / 2.0;
    let mut s = svg_open(w, h);
    s.push_str(&format!(
        "<defs><linearGradient id=\"bg\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">\
         <stop offset=\"0\" stop-color=\"{GRADIENT_TOP}\"/>\
         <stop offset=\"1\" stop-color=\"{GRADIENT_BOTTOM}\"/>\
         </linearGradient></defs>\n"
    ));
    s.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"url(#bg)\"/>\n"
    ));

    let lang = options.language;
    let centered = |fill, size| Label::new("middle", fill, size);
    let title = t(Text::CardTitle, lang);
    let subtitle = t(Text::CardSubtitle, lang);
    push_text(&mut s, cx, 120.0, centered("#ffffff", 48.0).bold().serif(), title);
    push_text(&mut s, cx, 160.0, centered("#d1d5db", 24.0), subtitle);
    push_text(&mut s, cx, 220.0, centered(ACCENT, 36.0).bold(), pattern_name);
    push_text(&mut s, cx, 260.0, centered("#9ca3af", 20.0), &config.summary());

    push_ornaments(&mut s, w);

    let corner = |anchor| Label::new(anchor, MUTED, 16.0);
    push_text(&mut s, w - 50.0, h - 50.0, corner("end"), &options.branding);
    push_text(&mut s, 50.0, h - 50.0, corner("start"), &options.year_label);

    s.push_str("</svg>\n");
    s
}

fn svg_open(w: f64, h: f64) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         viewBox=\"0 0 {w} {h}\">\n"
    )
}

fn push_ornaments(s: &mut String, w: f64) {
    let stroke = format!("fill=\"none\" stroke=\"{ACCENT}\" stroke-width=\"2\"");
    s.push_str(&format!("<circle cx=\"100\" cy=\"100\" r=\"30\" {stroke}/>\n"));
    s.push_str(&format!(
        "<circle cx=\"{:.0}\" cy=\"100\" r=\"25\" {stroke}/>\n",
        w - 100.0
    ));
    s.push_str(&format!("<line x1=\"50\" y1=\"400\" x2=\"200\" y2=\"400\" {stroke}/>\n"));
    s.push_str(&format!(
        "<line x1=\"{:.0}\" y1=\"400\" x2=\"{:.0}\" y2=\"400\" {stroke}/>\n",
        w - 200.0,
        w - 50.0
    ));
    for i in 0..5 {
        s.push_str(&format!(
            "<circle cx=\"{}\" cy=\"500\" r=\"3\" fill=\"{ACCENT}\"/>\n",
            150 + i * 40
        ));
    }
}

/// Anchor and style of one `<text>` element.
#[derive(Clone, Copy)]
struct Label<'a> {
    anchor: &'a str,
    fill: &'a str,
    size: f64,
    bold: bool,
    family: &'a str,
}

impl<'a> Label<'a> {
    fn new(anchor: &'a str, fill: &'a str, size: f64) -> Self {
        Label {
            anchor,
            fill,
            size,
            bold: false,
            family: "sans-serif",
        }
    }

    fn bold(self) -> Self {
        Label { bold: true, ..self }
    }

    fn serif(self) -> Self {
        Label {
            family: "serif",
            ..self
        }
    }
}

fn push_text(s: &mut String, x: f64, y: f64, label: Label<'_>, text: &str) {
    let Label {
        anchor,
        fill,
        size,
        bold,
        family,
    } = label;
    let weight = if bold { " font-weight=\"bold\"" } else { "" };
    s.push_str(&format!(
        "<text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"{anchor}\" fill=\"{fill}\" \
         font-family=\"{family}\" font-size=\"{size}\"{weight}>{}</text>\n",
        svg_escape(text)
    ));
}

/// Square thumbnail: title, `model • pattern` and the two colour swatches.
pub fn build_thumbnail_svg(config: &LapelConfig, size: u32, language: Language) -> String {
    let n = size as f64;
    let mut s = svg_open(n, n);
    s.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{n}\" height=\"{n}\" fill=\"{PREVIEW_BACKGROUND}\"/>\n"
    ));
    let title = t(Text::ThumbnailTitle, language);
    let caption = format!("{} • {}", config.model, config.pattern);
    let centered = |fill, size| Label::new("middle", fill, size);
    push_text(&mut s, n / 2.0, n / 3.0, centered(GRADIENT_TOP, n / 8.0).bold(), title);
    push_text(&mut s, n / 2.0, n / 2.0, centered(MUTED, n / 12.0), &caption);
    let swatch = n / 8.0;
    for (x, color) in [
        (n / 4.0, config.trim_color.rgb()),
        (n * 0.7, config.stitch_color.rgb()),
    ] {
        s.push_str(&format!(
            "<rect x=\"{x:.2}\" y=\"{:.2}\" width=\"{swatch:.2}\" height=\"{swatch:.2}\" \
             fill=\"{color}\"/>\n",
            n * 0.6
        ));
    }
    s.push_str("</svg>\n");
    s
}

/// Renders the social card to PNG bytes.
pub fn social_card_png(
    config: &LapelConfig,
    pattern_name: &str,
    options: &CardOptions,
) -> Result<Vec<u8>> {
    let svg = build_social_card_svg(config, pattern_name, options);
    let pixmap = render_svg(&svg, CARD_WIDTH, CARD_HEIGHT)?;
    let png = encode_png(&pixmap)?;
    info!(pattern = %config.pattern, bytes = png.len(), "social card rendered");
    Ok(png)
}

/// Renders the social card and returns it as a PNG data URL.
pub fn generate_social_preview(
    config: &LapelConfig,
    pattern_name: &str,
    options: &CardOptions,
) -> Result<String> {
    social_card_png(config, pattern_name, options).map(|png| png_data_url(&png))
}

/// Like [`generate_social_preview`], taking the pattern name from the
/// catalog. Unknown patterns produce no card.
pub fn generate_catalog_preview(
    config: &LapelConfig,
    options: &CardOptions,
) -> Result<Option<String>> {
    let Some(pattern) = pattern_by_id(&config.pattern) else {
        debug!(pattern = %config.pattern, "no catalog entry, skipping card");
        return Ok(None);
    };
    generate_social_preview(config, pattern.display_name(options.language), options).map(Some)
}

/// Renders the square thumbnail to PNG bytes. A zero size means the
/// default 300 px.
pub fn thumbnail_png(config: &LapelConfig, size: u32, language: Language) -> Result<Vec<u8>> {
    let size = if size == 0 { THUMBNAIL_SIZE } else { size };
    let svg = build_thumbnail_svg(config, size, language);
    encode_png(&render_svg(&svg, size, size)?)
}

pub fn generate_thumbnail(config: &LapelConfig, size: u32, language: Language) -> Result<String> {
    thumbnail_png(config, size, language).map(|png| png_data_url(&png))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lapel_core::{StitchColor, TrimColor};

    #[test]
    fn card_carries_texts_and_summary() {
        let mut c = LapelConfig::default();
        c.trim_color = TrimColor::Navy;
        let svg = build_social_card_svg(&c, "Ар-деко <1>", &CardOptions::default());
        assert!(svg.contains("Лацканы с историей"));
        assert!(svg.contains("Секрет на подвороте"));
        assert!(svg.contains("Ар-деко &lt;1&gt;"));
        assert!(svg.contains("notch • navy • red"));
        assert!(svg.contains("Made in EU"));
        assert!(svg.contains("© 2024"));
        assert!(svg.contains("width=\"1200\" height=\"630\""));
    }

    #[test]
    fn card_follows_language() {
        let options = CardOptions {
            language: Language::En,
            ..Default::default()
        };
        let svg = build_social_card_svg(&LapelConfig::default(), "Art Deco", &options);
        assert!(svg.contains("Lapels with a story"));
        assert!(!svg.contains("Лацканы"));
    }

    #[test]
    fn card_has_fixed_ornaments() {
        let svg = build_social_card_svg(&LapelConfig::default(), "x", &CardOptions::default());
        assert_eq!(svg.matches("<circle").count(), 7);
        assert_eq!(svg.matches("<line ").count(), 2);
        assert_eq!(svg.matches("<linearGradient ").count(), 1);
        assert!(svg.contains("cx=\"1100\" cy=\"100\" r=\"25\""));
        assert!(svg.contains("x1=\"1000\" y1=\"400\" x2=\"1150\""));
    }

    #[test]
    fn thumbnail_swatches_use_palette() {
        let mut c = LapelConfig::default();
        c.trim_color = TrimColor::Taupe;
        c.stitch_color = StitchColor::Gold;
        let svg = build_thumbnail_svg(&c, 300, Language::Ru);
        assert!(svg.contains("fill=\"#483c32\""));
        assert!(svg.contains("fill=\"#ca8a04\""));
        assert!(svg.contains("notch • geo01"));
        assert!(svg.contains("Лацкан"));
    }

    #[test]
    fn unknown_pattern_produces_no_card() {
        let mut c = LapelConfig::default();
        c.pattern = "nope".to_string();
        assert_eq!(generate_catalog_preview(&c, &CardOptions::default()).unwrap(), None);
    }
}
