// File: crates/voronoi-core/src/series.rs
// Summary: Point/series model for hover data, plus the cumulative stacking helper.

use std::collections::HashMap;

/// A plotted datum. `payload` is whatever the caller wants back on hover.
#[derive(Clone, Debug, PartialEq)]
pub struct Point<D> {
    pub x: f64,
    pub y: f64,
    /// Stacking baseline; only meaningful when stacked rendering is active.
    pub y0: Option<f64>,
    pub payload: D,
}

impl<D> Point<D> {
    pub fn new(x: f64, y: f64, payload: D) -> Self {
        Self { x, y, y0: None, payload }
    }

    pub fn with_baseline(mut self, y0: f64) -> Self {
        self.y0 = Some(y0);
        self
    }

    /// Top of the stacked bar: `y + y0`, with a missing baseline read as 0.0.
    pub fn stacked_y(&self) -> f64 {
        self.y + self.y0.unwrap_or(0.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series<D> {
    pub name: String,
    pub data: Vec<Point<D>>,
}

impl<D> Series<D> {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), data: Vec::new() }
    }

    pub fn with_data(name: impl Into<String>, data: Vec<Point<D>>) -> Self {
        Self { name: name.into(), data }
    }

    pub fn push(&mut self, point: Point<D>) {
        self.data.push(point);
    }

    pub fn len(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }
}

/// Every series of a chart, in draw order.
pub type Dataset<D> = Vec<Series<D>>;

/// Iterate all points of all series in encounter order.
pub fn flatten<D>(dataset: &[Series<D>]) -> impl Iterator<Item = &Point<D>> {
    dataset.iter().flat_map(|s| s.data.iter())
}

impl<D: Clone> Series<D> {
    /// Assign cumulative baselines so each series sits on top of the ones before it.
    /// Points are aligned by exact x; a series' `y0` at x is the sum of the `y` values
    /// of all earlier series at that x (0.0 when none).
    pub fn stacked(dataset: &[Series<D>]) -> Dataset<D> {
        let mut running: HashMap<u64, f64> = HashMap::new();
        dataset
            .iter()
            .map(|s| {
                let data = s
                    .data
                    .iter()
                    .map(|p| {
                        let acc = running.entry(key(p.x)).or_insert(0.0);
                        let out = Point { y0: Some(*acc), ..p.clone() };
                        *acc += p.y;
                        out
                    })
                    .collect();
                Series { name: s.name.clone(), data }
            })
            .collect()
    }
}

/// Bit pattern of a coordinate, with -0.0 folded onto 0.0.
pub(crate) fn key(v: f64) -> u64 {
    if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
}
