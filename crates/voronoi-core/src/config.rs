// File: crates/voronoi-core/src/config.rs
// Summary: Layer props and the validating builder that assembles them.

use std::sync::Arc;

use crate::domain::Domain;
use crate::error::ConfigError;
use crate::partition::{default_engine, EngineFactory, PartitionBuilder};
use crate::scale::ScaleFn;
use crate::series::Dataset;
use crate::types::{ClipRect, Margins, HEIGHT, WIDTH};

/// Everything a layer needs for one update. Only `dataset` and `domain` identity
/// decide whether the partition is rebuilt; the rest is read when it is.
#[derive(Clone)]
pub struct VoronoiProps<D> {
    pub dataset: Arc<Dataset<D>>,
    pub domain: Arc<Domain>,
    pub x_scale: ScaleFn,
    pub y_scale: ScaleFn,
    pub margins: Margins,
    pub width: f64,
    pub height: f64,
    pub focus: bool,
    pub stack: bool,
    pub init_voronoi: EngineFactory<D>,
}

impl<D: Clone + 'static> VoronoiProps<D> {
    pub fn builder(dataset: Arc<Dataset<D>>, domain: Arc<Domain>) -> VoronoiPropsBuilder<D> {
        VoronoiPropsBuilder {
            dataset,
            domain,
            x_scale: None,
            y_scale: None,
            margins: Margins::default(),
            width: WIDTH,
            height: HEIGHT,
            focus: false,
            stack: false,
            init_voronoi: None,
        }
    }

    pub fn clip_rect(&self) -> ClipRect {
        ClipRect::from_plot(self.width, self.height, &self.margins)
    }

    pub fn partition_builder(&self) -> PartitionBuilder<D> {
        PartitionBuilder::new(
            self.x_scale.clone(),
            self.y_scale.clone(),
            self.clip_rect(),
            self.init_voronoi.clone(),
        )
        .stack(self.stack)
    }

    /// Same configuration with a different dataset object.
    pub fn with_dataset(&self, dataset: Arc<Dataset<D>>) -> Self {
        Self { dataset, ..self.clone() }
    }

    /// Same configuration with a different domain object.
    pub fn with_domain(&self, domain: Arc<Domain>) -> Self {
        Self { domain, ..self.clone() }
    }
}

pub struct VoronoiPropsBuilder<D> {
    dataset: Arc<Dataset<D>>,
    domain: Arc<Domain>,
    x_scale: Option<ScaleFn>,
    y_scale: Option<ScaleFn>,
    margins: Margins,
    width: f64,
    height: f64,
    focus: bool,
    stack: bool,
    init_voronoi: Option<EngineFactory<D>>,
}

impl<D: Clone + 'static> VoronoiPropsBuilder<D> {
    pub fn x_scale(mut self, f: ScaleFn) -> Self {
        self.x_scale = Some(f);
        self
    }

    pub fn y_scale(mut self, f: ScaleFn) -> Self {
        self.y_scale = Some(f);
        self
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn focus(mut self, focus: bool) -> Self {
        self.focus = focus;
        self
    }

    pub fn stack(mut self, stack: bool) -> Self {
        self.stack = stack;
        self
    }

    /// Swap the partition engine; defaults to `ClippedVoronoi`.
    pub fn init_voronoi(mut self, factory: EngineFactory<D>) -> Self {
        self.init_voronoi = Some(factory);
        self
    }

    pub fn build(self) -> Result<VoronoiProps<D>, ConfigError> {
        let x_scale = self.x_scale.ok_or(ConfigError::MissingScale("x"))?;
        let y_scale = self.y_scale.ok_or(ConfigError::MissingScale("y"))?;
        let size_ok = |v: f64| v.is_finite() && v >= 0.0;
        if !size_ok(self.width) || !size_ok(self.height) {
            return Err(ConfigError::InvalidSize { width: self.width, height: self.height });
        }
        if !self.margins.is_finite() {
            return Err(ConfigError::NonFiniteMargins(self.margins));
        }
        Ok(VoronoiProps {
            dataset: self.dataset,
            domain: self.domain,
            x_scale,
            y_scale,
            margins: self.margins,
            width: self.width,
            height: self.height,
            focus: self.focus,
            stack: self.stack,
            init_voronoi: self.init_voronoi.unwrap_or_else(default_engine),
        })
    }
}
