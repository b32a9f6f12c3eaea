//! Raster back end for the lapel configurator.
//!
//! Draws the interactive preview into a tiny-skia pixmap and composes the
//! export cards as SVG, rasterised through resvg with the embedded font.

pub mod card;
pub mod pattern;
pub mod raster;
pub mod surface;

pub use card::{
    CardOptions, build_social_card_svg, build_thumbnail_svg, generate_catalog_preview,
    generate_social_preview, generate_thumbnail, social_card_png, thumbnail_png,
};
pub use pattern::decode_pattern;
pub use raster::{encode_png, png_data_url, render_svg};
pub use surface::{PixmapSurface, render_preview_png};
