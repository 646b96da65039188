// File: crates/voronoi-core/src/geometry.rs
// Summary: Lightweight convex-polygon helpers for cell construction and checks.

use crate::types::ScreenPoint;

/// Vertices closer than this (in pixels) are merged after clipping.
pub const VERTEX_EPS: f64 = 1e-9;

/// Clip a convex polygon against the half-plane of points at least as close to `keep`
/// as to `other` (the side of their perpendicular bisector that contains `keep`).
///
/// Returns the clipped polygon; it is empty when nothing of `poly` lies on that side.
pub fn clip_to_bisector(poly: &[ScreenPoint], keep: ScreenPoint, other: ScreenPoint) -> Vec<ScreenPoint> {
    // Signed distance (scaled) of p from the bisector; <= 0 means on `keep`'s side.
    let nx = other.x - keep.x;
    let ny = other.y - keep.y;
    let mx = (keep.x + other.x) * 0.5;
    let my = (keep.y + other.y) * 0.5;
    let side = |p: &ScreenPoint| (p.x - mx) * nx + (p.y - my) * ny;

    let n = poly.len();
    let mut out = Vec::with_capacity(n + 1);
    for i in 0..n {
        let cur = poly[i];
        let next = poly[(i + 1) % n];
        let sc = side(&cur);
        let sn = side(&next);
        if sc <= 0.0 {
            out.push(cur);
        }
        // edge crosses the bisector strictly
        if (sc < 0.0 && sn > 0.0) || (sc > 0.0 && sn < 0.0) {
            let t = sc / (sc - sn);
            out.push(ScreenPoint::new(cur.x + (next.x - cur.x) * t, cur.y + (next.y - cur.y) * t));
        }
    }
    dedup_ring(out)
}

/// Drop consecutive (and wrap-around) vertices that coincide within `VERTEX_EPS`.
fn dedup_ring(mut ring: Vec<ScreenPoint>) -> Vec<ScreenPoint> {
    let eps_sq = VERTEX_EPS * VERTEX_EPS;
    ring.dedup_by(|b, a| a.distance_sq(b) <= eps_sq);
    while ring.len() > 1 && ring[0].distance_sq(&ring[ring.len() - 1]) <= eps_sq {
        ring.pop();
    }
    ring
}

/// Signed shoelace area; positive for clockwise rings in y-down screen space.
pub fn signed_area(poly: &[ScreenPoint]) -> f64 {
    let n = poly.len();
    if n < 3 { return 0.0; }
    let mut acc = 0.0;
    for i in 0..n {
        let a = poly[i];
        let b = poly[(i + 1) % n];
        acc += a.x * b.y - b.x * a.y;
    }
    acc * 0.5
}

pub fn area(poly: &[ScreenPoint]) -> f64 {
    signed_area(poly).abs()
}

/// True when every turn of the ring has the same orientation (collinear turns allowed).
pub fn is_convex(poly: &[ScreenPoint], tol: f64) -> bool {
    let n = poly.len();
    if n < 3 { return false; }
    let mut sign = 0.0f64;
    for i in 0..n {
        let a = poly[i];
        let b = poly[(i + 1) % n];
        let c = poly[(i + 2) % n];
        let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
        if cross.abs() <= tol { continue; }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}

/// Point-in-convex-polygon test; boundary points count as inside within `tol`.
pub fn convex_contains(poly: &[ScreenPoint], p: ScreenPoint, tol: f64) -> bool {
    let n = poly.len();
    if n < 3 { return false; }
    // a polygon without area encloses nothing
    let signed = signed_area(poly);
    if signed == 0.0 || !signed.is_finite() { return false; }
    let orient = signed.signum();
    (0..n).all(|i| {
        let a = poly[i];
        let b = poly[(i + 1) % n];
        let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
        cross * orient >= -tol
    })
}
