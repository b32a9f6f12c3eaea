//! Interactive garment preview.
//!
//! A frame is always drawn from scratch: background, silhouette, pattern
//! filled lapel with its trim, then the loop and buttons. Each step paints
//! over the previous one, so the order is fixed.
//!
//! Pattern images arrive asynchronously. [`PatternLoads`] remembers which
//! pattern was asked for last and discards any image that settles for a
//! different one.

use tracing::debug;

use crate::constants::{
    BUTTON_OFFSETS_Y, BUTTON_RADIUS, DETAIL_LINE_WIDTH, LOOP_OFFSET_Y, LOOP_RADIUS,
    PREVIEW_BACKGROUND, SILHOUETTE_FILL, SILHOUETTE_LINE_WIDTH, SILHOUETTE_STROKE,
    TRIM_LINE_WIDTH,
};
use crate::error::LapelError;
use crate::geometry::{Point, build_lapel_path, build_silhouette_path};
use crate::model::LapelConfig;
use crate::palette::{Rgb, resolve_stitch_color, resolve_trim_color};
use crate::surface::DrawingSurface;

fn hex(color: &str) -> Rgb {
    Rgb::from_hex(color).unwrap_or(Rgb::BLACK)
}

/// Draws one full frame for `config` onto `surface`.
pub fn render_preview<S: DrawingSurface>(
    surface: &mut S,
    config: &LapelConfig,
    pattern: &S::Pattern,
) {
    let (w, h) = surface.size();
    let (cx, cy) = (w / 2.0, h / 2.0);

    surface.clear();
    surface.fill_background(hex(PREVIEW_BACKGROUND));

    let silhouette = build_silhouette_path(config.gender).translated(cx, cy);
    surface.fill_path(&silhouette, hex(SILHOUETTE_FILL));
    surface.stroke_path(&silhouette, hex(SILHOUETTE_STROKE), SILHOUETTE_LINE_WIDTH);

    let lapel = build_lapel_path(config.model).translated(cx, cy);
    surface.fill_path_with_pattern(&lapel, pattern);
    surface.stroke_path(
        &lapel,
        resolve_trim_color(config.trim_color.as_str()),
        TRIM_LINE_WIDTH,
    );

    let stitch = resolve_stitch_color(config.stitch_color.as_str());
    surface.stroke_circle(
        Point {
            x: cx,
            y: cy + LOOP_OFFSET_Y,
        },
        LOOP_RADIUS,
        stitch,
        DETAIL_LINE_WIDTH,
    );
    for dy in BUTTON_OFFSETS_Y {
        surface.fill_circle(Point { x: cx, y: cy + dy }, BUTTON_RADIUS, stitch);
    }
}

/// Handle for one image request; hand it back to [`PatternLoads::settle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pattern: String,
}

impl LoadTicket {
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The image belongs to the current pattern and is now drawable.
    Applied,
    /// The current pattern failed to load; nothing will be drawn for it.
    Failed,
    /// The pattern changed while this load was in flight; result dropped.
    Stale,
}

/// Tracks the most recent pattern image request and its result.
#[derive(Debug)]
pub struct PatternLoads<I> {
    requested: Option<String>,
    loaded: Option<(String, I)>,
    loading: bool,
}

impl<I> Default for PatternLoads<I> {
    fn default() -> Self {
        PatternLoads {
            requested: None,
            loaded: None,
            loading: false,
        }
    }
}

impl<I> PatternLoads<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers interest in `pattern`. Returns a ticket when a fetch has to
    /// be started, `None` when the image is already loaded or in flight.
    pub fn request(&mut self, pattern: &str) -> Option<LoadTicket> {
        if self.requested.as_deref() == Some(pattern) {
            return None;
        }
        self.requested = Some(pattern.to_string());
        self.loading = true;
        Some(LoadTicket {
            pattern: pattern.to_string(),
        })
    }

    /// Records the result of the load started with `ticket`.
    pub fn settle(&mut self, ticket: LoadTicket, result: Result<I, LapelError>) -> LoadOutcome {
        if self.requested.as_deref() != Some(ticket.pattern.as_str()) {
            debug!(pattern = %ticket.pattern, "discarding superseded pattern load");
            return LoadOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(image) => {
                self.loaded = Some((ticket.pattern, image));
                LoadOutcome::Applied
            }
            Err(e) => {
                debug!("pattern load failed: {e}");
                self.loaded = None;
                // Allow a later request for the same id to retry.
                self.requested = None;
                LoadOutcome::Failed
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The image to draw `config` with, if it has loaded for that pattern.
    pub fn image_for(&self, config: &LapelConfig) -> Option<&I> {
        if self.loading {
            return None;
        }
        match &self.loaded {
            Some((id, image)) if *id == config.pattern => Some(image),
            _ => None,
        }
    }
}

/// Redraws when an image for the current pattern is available. Returns
/// whether anything was drawn.
pub fn redraw<S: DrawingSurface>(
    surface: &mut S,
    config: &LapelConfig,
    loads: &PatternLoads<S::Pattern>,
) -> bool {
    match loads.image_for(config) {
        Some(image) => {
            render_preview(surface, config, image);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Path;
    use crate::model::{ConfigPatch, Gender, LapelModel, StitchColor, TrimColor};

    #[derive(Clone, Debug, PartialEq)]
    pub enum Op {
        Clear,
        Background(Rgb),
        Fill(Path, Rgb),
        FillPattern(Path, &'static str),
        Stroke(Path, Rgb, f64),
        FillCircle(Point, f64, Rgb),
        StrokeCircle(Point, f64, Rgb, f64),
    }

    /// Records every call for order assertions.
    pub struct Recorder {
        pub ops: Vec<Op>,
    }

    impl DrawingSurface for Recorder {
        type Pattern = &'static str;

        fn size(&self) -> (f64, f64) {
            (400.0, 300.0)
        }
        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }
        fn fill_background(&mut self, color: Rgb) {
            self.ops.push(Op::Background(color));
        }
        fn fill_path(&mut self, path: &Path, color: Rgb) {
            self.ops.push(Op::Fill(path.clone(), color));
        }
        fn fill_path_with_pattern(&mut self, path: &Path, pattern: &&'static str) {
            self.ops.push(Op::FillPattern(path.clone(), *pattern));
        }
        fn stroke_path(&mut self, path: &Path, color: Rgb, width: f64) {
            self.ops.push(Op::Stroke(path.clone(), color, width));
        }
        fn fill_circle(&mut self, center: Point, radius: f64, color: Rgb) {
            self.ops.push(Op::FillCircle(center, radius, color));
        }
        fn stroke_circle(&mut self, center: Point, radius: f64, color: Rgb, width: f64) {
            self.ops.push(Op::StrokeCircle(center, radius, color, width));
        }
    }

    fn config() -> LapelConfig {
        LapelConfig {
            model: LapelModel::Peak,
            pattern: "geo02".into(),
            trim_color: TrimColor::Navy,
            stitch_color: StitchColor::Gold,
            gender: Gender::Female,
        }
    }

    #[test]
    fn frame_is_drawn_in_order() {
        let mut r = Recorder { ops: Vec::new() };
        let c = config();
        render_preview(&mut r, &c, &"geo02-image");

        let lapel = build_lapel_path(LapelModel::Peak).translated(200.0, 150.0);
        let silhouette = build_silhouette_path(Gender::Female).translated(200.0, 150.0);
        let gold = StitchColor::Gold.rgb();
        assert_eq!(
            r.ops,
            vec![
                Op::Clear,
                Op::Background(hex("#f8fafc")),
                Op::Fill(silhouette.clone(), hex("#ffffff")),
                Op::Stroke(silhouette, hex("#374151"), 2.0),
                Op::FillPattern(lapel.clone(), "geo02-image"),
                Op::Stroke(lapel, TrimColor::Navy.rgb(), 3.0),
                Op::StrokeCircle(Point { x: 200.0, y: 130.0 }, 8.0, gold, 2.0),
                Op::FillCircle(Point { x: 200.0, y: 170.0 }, 4.0, gold),
                Op::FillCircle(Point { x: 200.0, y: 190.0 }, 4.0, gold),
            ]
        );
    }

    #[test]
    fn nothing_is_drawn_while_loading() {
        let mut loads: PatternLoads<&'static str> = PatternLoads::new();
        let mut r = Recorder { ops: Vec::new() };
        let c = config();
        let ticket = loads.request(&c.pattern).unwrap();
        assert!(loads.is_loading());
        assert!(!redraw(&mut r, &c, &loads));
        assert!(r.ops.is_empty());

        assert_eq!(loads.settle(ticket, Ok("img")), LoadOutcome::Applied);
        assert!(!loads.is_loading());
        assert!(redraw(&mut r, &c, &loads));
        assert_eq!(r.ops.first(), Some(&Op::Clear));
    }

    #[test]
    fn superseded_load_is_discarded() {
        let mut loads: PatternLoads<&'static str> = PatternLoads::new();
        let a = config();
        let b = a.merged(ConfigPatch::pattern("geo03"));

        let ticket_a = loads.request(&a.pattern).unwrap();
        let ticket_b = loads.request(&b.pattern).unwrap();

        assert_eq!(loads.settle(ticket_a, Ok("image-a")), LoadOutcome::Stale);
        assert!(loads.is_loading());
        assert!(loads.image_for(&b).is_none());
        assert!(loads.image_for(&a).is_none());

        assert_eq!(loads.settle(ticket_b, Ok("image-b")), LoadOutcome::Applied);
        assert_eq!(loads.image_for(&b), Some(&"image-b"));
    }

    #[test]
    fn previous_image_is_not_reused_for_a_new_pattern() {
        let mut loads: PatternLoads<&'static str> = PatternLoads::new();
        let a = config();
        let t = loads.request(&a.pattern).unwrap();
        loads.settle(t, Ok("image-a"));

        let b = a.merged(ConfigPatch::pattern("geo04"));
        let _pending = loads.request(&b.pattern).unwrap();
        let mut r = Recorder { ops: Vec::new() };
        assert!(!redraw(&mut r, &b, &loads));
        assert!(r.ops.is_empty());
    }

    #[test]
    fn same_pattern_is_not_fetched_twice() {
        let mut loads: PatternLoads<&'static str> = PatternLoads::new();
        let t = loads.request("geo01").unwrap();
        assert!(loads.request("geo01").is_none());
        loads.settle(t, Ok("img"));
        assert!(loads.request("geo01").is_none());
    }

    #[test]
    fn failure_clears_loading_and_draws_nothing() {
        let mut loads: PatternLoads<&'static str> = PatternLoads::new();
        let c = config();
        let t = loads.request(&c.pattern).unwrap();
        let outcome = loads.settle(
            t,
            Err(LapelError::ImageLoadFailure {
                pattern: c.pattern.clone(),
                reason: "404".into(),
            }),
        );
        assert_eq!(outcome, LoadOutcome::Failed);
        assert!(!loads.is_loading());
        assert!(loads.image_for(&c).is_none());
        // a later change back to the pattern retries
        assert!(loads.request(&c.pattern).is_some());
    }

    #[test]
    fn color_only_change_redraws_with_the_cached_image() {
        let mut loads: PatternLoads<&'static str> = PatternLoads::new();
        let c = config();
        let t = loads.request(&c.pattern).unwrap();
        loads.settle(t, Ok("img"));
        let next = c.merged(ConfigPatch::trim_color(TrimColor::Ivory));
        assert!(loads.request(&next.pattern).is_none());
        let mut r = Recorder { ops: Vec::new() };
        assert!(redraw(&mut r, &next, &loads));
        assert!(r.ops.contains(&Op::Stroke(
            build_lapel_path(LapelModel::Peak).translated(200.0, 150.0),
            TrimColor::Ivory.rgb(),
            3.0
        )));
    }
}
