// File: crates/voronoi-core/src/partition.rs
// Summary: Pluggable planar-partition engines and the builder that feeds them screen-space sites.

use std::fmt::Write as _;
use std::sync::Arc;

use crate::geometry::{area, clip_to_bisector, convex_contains};
use crate::scale::ScaleFn;
use crate::series::Point;
use crate::types::{ClipRect, ScreenPoint};

/// Extracts one screen coordinate from a point.
pub type Accessor<D> = Arc<dyn Fn(&Point<D>) -> f64>;

/// Creates a fresh engine for every rebuild.
pub type EngineFactory<D> = Arc<dyn Fn() -> Box<dyn PartitionEngine<D>>>;

/// Cells smaller than this (px²) are treated as clipped away.
const MIN_CELL_AREA: f64 = 1e-12;

/// Extent used until an engine is given a clip rectangle.
const UNBOUNDED: f64 = 1e6;

/// One partition region: the convex polygon of screen positions nearest to `site`.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell<D> {
    pub polygon: Vec<ScreenPoint>,
    pub site: ScreenPoint,
    pub point: Point<D>,
}

impl<D> Cell<D> {
    /// SVG path string visiting the vertices in order and closing back: `M x,y L x,y … Z`.
    pub fn path_data(&self) -> String {
        let mut d = String::with_capacity(self.polygon.len() * 16);
        for (i, v) in self.polygon.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{}{},{}", cmd, v.x, v.y);
        }
        if !self.polygon.is_empty() {
            d.push('Z');
        }
        d
    }

    pub fn contains(&self, p: ScreenPoint, tol: f64) -> bool {
        convex_contains(&self.polygon, p, tol)
    }

    pub fn area(&self) -> f64 {
        area(&self.polygon)
    }
}

/// Strategy interface over the geometry engine that turns sites into cells.
pub trait PartitionEngine<D> {
    /// Set the coordinate accessors and the rectangle every cell is clipped to.
    fn configure(&mut self, x: Accessor<D>, y: Accessor<D>, clip: ClipRect);
    /// Partition the clip rectangle among `points`.
    fn cells(&self, points: &[Point<D>]) -> Vec<Cell<D>>;
}

/// Factory for the default engine.
pub fn default_engine<D: Clone + 'static>() -> EngineFactory<D> {
    Arc::new(|| Box::new(ClippedVoronoi::<D>::new()) as Box<dyn PartitionEngine<D>>)
}

/// Voronoi cells built by clipping the clip rectangle against the perpendicular
/// bisector of each site and its neighbours, nearest first.
///
/// A neighbour at distance `d` can only cut the cell if `d < 2r`, where `r` is the
/// distance from the site to its farthest current vertex, so the scan stops at the
/// first neighbour past that bound.
///
/// Degenerate input:
/// - collinear sites give parallel strips;
/// - sites whose screen coordinate is not finite are skipped;
/// - sites that coincide on screen keep only the first one;
/// - a zero-area clip rectangle gives no cells.
pub struct ClippedVoronoi<D> {
    x: Accessor<D>,
    y: Accessor<D>,
    clip: ClipRect,
}

impl<D: 'static> ClippedVoronoi<D> {
    pub fn new() -> Self {
        Self {
            x: Arc::new(|p: &Point<D>| p.x),
            y: Arc::new(|p: &Point<D>| p.y),
            clip: ClipRect::new(-UNBOUNDED, -UNBOUNDED, UNBOUNDED, UNBOUNDED),
        }
    }
}

impl<D: 'static> Default for ClippedVoronoi<D> {
    fn default() -> Self { Self::new() }
}

impl<D: Clone> PartitionEngine<D> for ClippedVoronoi<D> {
    fn configure(&mut self, x: Accessor<D>, y: Accessor<D>, clip: ClipRect) {
        self.x = x;
        self.y = y;
        self.clip = clip;
    }

    fn cells(&self, points: &[Point<D>]) -> Vec<Cell<D>> {
        if points.is_empty() {
            return Vec::new();
        }
        if self.clip.is_degenerate() {
            tracing::warn!("voronoi: clip rect {:?} has no area; no cells produced", self.clip);
            return Vec::new();
        }

        let mut sites: Vec<(usize, ScreenPoint)> = Vec::with_capacity(points.len());
        for (idx, p) in points.iter().enumerate() {
            let s = ScreenPoint::new((self.x)(p), (self.y)(p));
            if s.is_finite() {
                sites.push((idx, s));
            }
        }
        if sites.len() < points.len() {
            tracing::warn!("voronoi: skipped {} sites with non-finite screen coordinates", points.len() - sites.len());
        }

        let corners = self.clip.corners();
        let mut out = Vec::with_capacity(sites.len());
        let mut order: Vec<(f64, usize)> = Vec::with_capacity(sites.len());
        let mut dropped = 0usize;

        'site: for (i, &(idx, site)) in sites.iter().enumerate() {
            order.clear();
            order.extend(
                sites.iter().enumerate().filter(|(j, _)| *j != i).map(|(j, (_, s))| (site.distance_sq(s), j)),
            );
            order.sort_unstable_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

            let mut poly = corners.to_vec();
            let mut reach_sq = farthest_sq(site, &poly);
            for &(d_sq, j) in &order {
                if d_sq >= 4.0 * reach_sq {
                    break;
                }
                if d_sq == 0.0 {
                    // screen-coincident: the earlier site owns the cell
                    if j < i {
                        dropped += 1;
                        continue 'site;
                    }
                    continue;
                }
                poly = clip_to_bisector(&poly, site, sites[j].1);
                if poly.len() < 3 {
                    break;
                }
                reach_sq = farthest_sq(site, &poly);
            }

            if poly.len() < 3 || area(&poly) <= MIN_CELL_AREA {
                dropped += 1;
                continue;
            }
            out.push(Cell { polygon: poly, site, point: points[idx].clone() });
        }

        if dropped > 0 {
            tracing::debug!("voronoi: {} sites produced no cell inside {:?}", dropped, self.clip);
        }
        out
    }
}

fn farthest_sq(site: ScreenPoint, poly: &[ScreenPoint]) -> f64 {
    poly.iter().map(|v| site.distance_sq(v)).fold(0.0, f64::max)
}

/// Composes caller scales into accessors and runs an engine over deduplicated points.
pub struct PartitionBuilder<D> {
    x_scale: ScaleFn,
    y_scale: ScaleFn,
    stack: bool,
    clip: ClipRect,
    factory: EngineFactory<D>,
}

impl<D: Clone + 'static> PartitionBuilder<D> {
    pub fn new(x_scale: ScaleFn, y_scale: ScaleFn, clip: ClipRect, factory: EngineFactory<D>) -> Self {
        Self { x_scale, y_scale, stack: false, clip, factory }
    }

    pub fn stack(mut self, stack: bool) -> Self {
        self.stack = stack;
        self
    }

    pub fn clip(&self) -> ClipRect {
        self.clip
    }

    /// `x -> x_scale(p.x)`, `y -> y_scale(p.y + p.y0)` when stacked, else `y_scale(p.y)`.
    pub fn accessors(&self) -> (Accessor<D>, Accessor<D>) {
        let xs = self.x_scale.clone();
        let ys = self.y_scale.clone();
        let x: Accessor<D> = Arc::new(move |p: &Point<D>| xs(p.x));
        let y: Accessor<D> = if self.stack {
            Arc::new(move |p: &Point<D>| ys(p.stacked_y()))
        } else {
            Arc::new(move |p: &Point<D>| ys(p.y))
        };
        (x, y)
    }

    /// Screen position of a single point under this builder's accessors.
    pub fn site(&self, p: &Point<D>) -> ScreenPoint {
        let (x, y) = self.accessors();
        ScreenPoint::new(x(p), y(p))
    }

    pub fn build(&self, points: &[Point<D>]) -> Vec<Cell<D>> {
        let (x, y) = self.accessors();
        let mut engine = (self.factory)();
        engine.configure(x, y, self.clip);
        let cells = engine.cells(points);
        tracing::debug!("partition: {} points -> {} cells (stack={})", points.len(), cells.len(), self.stack);
        cells
    }
}
