/// Shared constants for the configurator.
/// Drawing coordinates are in canvas pixels unless noted otherwise.

/// Query string parameter names, in the order they are emitted.
pub const PARAM_MODEL: &str = "model";
pub const PARAM_PATTERN: &str = "pattern";
pub const PARAM_TRIM: &str = "trim";
pub const PARAM_STITCH: &str = "stitch";
pub const PARAM_GENDER: &str = "gender";
pub const PARAMS: [&str; 5] = [
    PARAM_MODEL,
    PARAM_PATTERN,
    PARAM_TRIM,
    PARAM_STITCH,
    PARAM_GENDER,
];

/// Local storage key holding the last configuration as JSON.
pub const STORAGE_KEY: &str = "lapelConfig";
pub const DEFAULT_PATTERN: &str = "geo01";

/// Interactive preview surface.
pub const PREVIEW_WIDTH: u32 = 400;
pub const PREVIEW_HEIGHT: u32 = 300;
pub const PREVIEW_BACKGROUND: &str = "#f8fafc";
pub const SILHOUETTE_FILL: &str = "#ffffff";
pub const SILHOUETTE_STROKE: &str = "#374151";
pub const SILHOUETTE_LINE_WIDTH: f64 = 2.0;
pub const TRIM_LINE_WIDTH: f64 = 3.0;
pub const DETAIL_LINE_WIDTH: f64 = 2.0;

/// Boutonniere loop and buttons, relative to the silhouette center.
pub const LOOP_OFFSET_Y: f64 = -20.0;
pub const LOOP_RADIUS: f64 = 8.0;
pub const BUTTON_OFFSETS_Y: [f64; 2] = [20.0, 40.0];
pub const BUTTON_RADIUS: f64 = 4.0;

/// Social card (Open Graph size).
pub const CARD_WIDTH: u32 = 1200;
pub const CARD_HEIGHT: u32 = 630;
pub const THUMBNAIL_SIZE: u32 = 300;
