// File: crates/voronoi-core/src/dedup.rs
// Summary: Collapse coincident (x, y) points before partitioning; first occurrence wins.

use std::collections::HashSet;

use crate::series::{flatten, key, Point, Series};

/// Flatten `dataset` and keep one point per distinct `(x, y)`, in encounter order.
///
/// Partition engines cannot place two sites on the same coordinate, and only one marker
/// can occupy it anyway, so later duplicates are dropped silently.
pub fn dedup<D: Clone>(dataset: &[Series<D>]) -> Vec<Point<D>> {
    collapse(flatten(dataset))
}

/// Same as [`dedup`] over an already flattened point list.
pub fn dedup_points<D: Clone>(points: &[Point<D>]) -> Vec<Point<D>> {
    collapse(points.iter())
}

fn collapse<'a, D: Clone + 'a>(points: impl Iterator<Item = &'a Point<D>>) -> Vec<Point<D>> {
    let mut seen: HashSet<(u64, u64)> = HashSet::new();
    let mut out = Vec::new();
    let mut dropped = 0usize;
    for p in points {
        if seen.insert((key(p.x), key(p.y))) {
            out.push(p.clone());
        } else {
            dropped += 1;
        }
    }
    if dropped > 0 {
        tracing::debug!("dedup: collapsed {} coincident points, {} retained", dropped, out.len());
    }
    out
}
