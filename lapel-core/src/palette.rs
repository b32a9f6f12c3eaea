use std::fmt;

use crate::model::{StitchColor, TrimColor};

/// Opaque display colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parses `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let h = hex.trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&h[i..i + 2], 16).ok();
        Some(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// cream and beige share a swatch in the product range
const TRIM_COLORS: [(&str, Rgb); 6] = [
    ("ivory", Rgb::new(0xff, 0xff, 0xf0)),
    ("cream", Rgb::new(0xf5, 0xf5, 0xdc)),
    ("beige", Rgb::new(0xf5, 0xf5, 0xdc)),
    ("taupe", Rgb::new(0x48, 0x3c, 0x32)),
    ("charcoal", Rgb::new(0x36, 0x45, 0x4f)),
    ("navy", Rgb::new(0x00, 0x00, 0x80)),
];

const STITCH_COLORS: [(&str, Rgb); 6] = [
    ("red", Rgb::new(0xdc, 0x26, 0x26)),
    ("blue", Rgb::new(0x25, 0x63, 0xeb)),
    ("green", Rgb::new(0x16, 0xa3, 0x4a)),
    ("gold", Rgb::new(0xca, 0x8a, 0x04)),
    ("purple", Rgb::new(0x93, 0x33, 0xea)),
    ("black", Rgb::new(0x00, 0x00, 0x00)),
];

fn lookup(table: &[(&str, Rgb)], token: &str) -> Rgb {
    table
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, c)| *c)
        .unwrap_or(Rgb::BLACK)
}

/// Display colour for a trim token; unknown tokens resolve to black.
pub fn resolve_trim_color(token: &str) -> Rgb {
    lookup(&TRIM_COLORS, token)
}

/// Display colour for a stitch token; unknown tokens resolve to black.
pub fn resolve_stitch_color(token: &str) -> Rgb {
    lookup(&STITCH_COLORS, token)
}

impl TrimColor {
    pub fn rgb(self) -> Rgb {
        resolve_trim_color(self.as_str())
    }
}

impl StitchColor {
    pub fn rgb(self) -> Rgb {
        resolve_stitch_color(self.as_str())
    }
}
