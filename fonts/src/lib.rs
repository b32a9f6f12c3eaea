//! Font face embedded at build time for text on exported cards.

/// Raw OpenType data. Empty when the build could not fetch the font.
pub static FONT_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/SourceHanSansSC-Regular.otf"));

/// Whether a real face was embedded.
pub fn is_embedded() -> bool {
    !FONT_BYTES.is_empty()
}
