//! Garment and lapel outlines.
//!
//! Paths are built around the silhouette center at `(0, 0)` with y growing
//! downwards, like canvas coordinates. Renderers translate them onto the
//! surface center. Every builder depends on a single enum value only.

use serde::{Deserialize, Serialize};

use crate::model::{Gender, LapelModel};

/// Basic two dimensional point used for geometry operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Point {
    fn from(v: (f64, f64)) -> Self {
        Point { x: v.0, y: v.1 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Quadratic curve: control point, end point.
    QuadTo(Point, Point),
    Close,
}

/// A closed outline made of line and quadratic segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    fn start(p: (f64, f64)) -> Self {
        Path {
            commands: vec![PathCommand::MoveTo(p.into())],
        }
    }

    fn line(mut self, p: (f64, f64)) -> Self {
        self.commands.push(PathCommand::LineTo(p.into()));
        self
    }

    fn quad(mut self, c: (f64, f64), p: (f64, f64)) -> Self {
        self.commands.push(PathCommand::QuadTo(c.into(), p.into()));
        self
    }

    fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Every point the path mentions, control points included, in order.
    pub fn points(&self) -> Vec<Point> {
        let mut out = Vec::new();
        for c in &self.commands {
            match *c {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => out.push(p),
                PathCommand::QuadTo(ctrl, p) => {
                    out.push(ctrl);
                    out.push(p);
                }
                PathCommand::Close => {}
            }
        }
        out
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    pub fn has_curves(&self) -> bool {
        self.commands
            .iter()
            .any(|c| matches!(c, PathCommand::QuadTo(..)))
    }

    /// Number of straight segments, counting the implicit closing edge.
    pub fn line_segments(&self) -> usize {
        let lines = self
            .commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(_)))
            .count();
        if self.is_closed() { lines + 1 } else { lines }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Path {
        let t = |p: Point| Point {
            x: p.x + dx,
            y: p.y + dy,
        };
        let commands = self
            .commands
            .iter()
            .map(|c| match *c {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(t(p)),
                PathCommand::LineTo(p) => PathCommand::LineTo(t(p)),
                PathCommand::QuadTo(ctrl, p) => PathCommand::QuadTo(t(ctrl), t(p)),
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Path { commands }
    }

    /// (minx, miny, maxx, maxy) over all points, control points included.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        bounds_of_points(&self.points())
    }
}

/// Lapel outline for `model`.
///
/// Every variant shares the same rectangular base between y = -100 and
/// y = -40; they differ in how the collar edge runs between the two
/// shoulder points.
pub fn build_lapel_path(model: LapelModel) -> Path {
    match model {
        // V notch cut inwards between collar and lapel edge.
        LapelModel::Notch => Path::start((-60.0, -100.0))
            .line((-40.0, -80.0))
            .line((-20.0, -60.0))
            .line((20.0, -60.0))
            .line((40.0, -80.0))
            .line((60.0, -100.0))
            .line((60.0, -40.0))
            .line((-60.0, -40.0))
            .close(),
        // Collar edge rises outwards into a peak.
        LapelModel::Peak => Path::start((-60.0, -100.0))
            .line((-30.0, -120.0))
            .line((30.0, -120.0))
            .line((60.0, -100.0))
            .line((60.0, -40.0))
            .line((-60.0, -40.0))
            .close(),
        LapelModel::Shawl => Path::start((-60.0, -100.0))
            .quad((0.0, -130.0), (60.0, -100.0))
            .line((60.0, -40.0))
            .quad((0.0, -70.0), (-60.0, -40.0))
            .close(),
    }
}

/// Outer garment boundary: angular for men, curved shoulders and hem for
/// women.
pub fn build_silhouette_path(gender: Gender) -> Path {
    match gender {
        Gender::Male => Path::start((-80.0, -120.0))
            .line((80.0, -120.0))
            .line((80.0, 80.0))
            .line((-80.0, 80.0))
            .close(),
        Gender::Female => Path::start((-70.0, -110.0))
            .quad((0.0, -130.0), (70.0, -110.0))
            .line((70.0, 70.0))
            .quad((0.0, 90.0), (-70.0, 70.0))
            .close(),
    }
}

pub fn bounds_of_points(pts: &[Point]) -> (f64, f64, f64, f64) {
    let mut minx = f64::INFINITY;
    let mut miny = f64::INFINITY;
    let mut maxx = f64::NEG_INFINITY;
    let mut maxy = f64::NEG_INFINITY;
    for p in pts {
        minx = minx.min(p.x);
        miny = miny.min(p.y);
        maxx = maxx.max(p.x);
        maxy = maxy.max(p.y);
    }
    (minx, miny, maxx, maxy)
}
