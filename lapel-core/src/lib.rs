//! Configurator core for a lapel insert designer.
//!
//! Everything here is platform independent: the browser runtime and the
//! offline renderer plug in through [`store::QueryChannel`],
//! [`store::KeyValueStorage`], [`surface::DrawingSurface`] and the
//! clipboard/share traits in [`share`].

pub mod catalog;
pub mod codec;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod i18n;
pub mod model;
pub mod palette;
pub mod preview;
pub mod share;
pub mod store;
pub mod stored;
pub mod surface;

pub use catalog::{
    CatalogEntry, Category, PATTERNS, PatternDescriptor, catalog_entries, pattern_by_id,
};
pub use error::{LapelError, Result};
pub use geometry::{Path, PathCommand, Point, build_lapel_path, build_silhouette_path};
pub use i18n::{Language, Text, t};
pub use model::{ConfigPatch, Gender, LapelConfig, LapelModel, StitchColor, TrimColor};
pub use palette::{Rgb, resolve_stitch_color, resolve_trim_color};
pub use preview::{LoadOutcome, LoadTicket, PatternLoads, redraw, render_preview};
pub use store::{ConfigSource, ConfigStore, KeyValueStorage, QueryChannel};
pub use surface::DrawingSurface;
