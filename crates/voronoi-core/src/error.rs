// File: crates/voronoi-core/src/error.rs
// Summary: Configuration errors reported when layer props are built.

use thiserror::Error;

use crate::types::Margins;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing {0} scale function")]
    MissingScale(&'static str),

    #[error("plot size must be finite and non-negative, got {width}x{height}")]
    InvalidSize { width: f64, height: f64 },

    #[error("margins must be finite, got {0:?}")]
    NonFiniteMargins(Margins),
}
