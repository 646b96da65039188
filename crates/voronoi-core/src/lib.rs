// File: crates/voronoi-core/src/lib.rs
// Summary: Core library entry point; exports the Voronoi hover overlay pipeline.

pub mod config;
pub mod dedup;
pub mod domain;
pub mod error;
pub mod focus;
pub mod geometry;
pub mod layer;
pub mod overlay;
pub mod partition;
pub mod rebuild;
pub mod scale;
pub mod series;
pub mod theme;
pub mod types;

pub use config::{VoronoiProps, VoronoiPropsBuilder};
pub use dedup::{dedup, dedup_points};
pub use domain::Domain;
pub use error::ConfigError;
pub use focus::{FocusIndicator, FocusStyle};
pub use layer::{RenderOptions, VoronoiLayer};
pub use overlay::{HitOverlay, HoverCallbacks, HoverEvent};
pub use partition::{default_engine, Accessor, Cell, ClippedVoronoi, EngineFactory, PartitionBuilder, PartitionEngine};
pub use rebuild::{RebuildController, RebuildDecision, RebuildReason, RebuildState};
pub use scale::{Scale, ScaleFn};
pub use series::{Dataset, Point, Series};
pub use theme::Theme;
pub use types::{ClipRect, Margins, ScreenPoint};
