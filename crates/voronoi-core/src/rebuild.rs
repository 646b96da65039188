// File: crates/voronoi-core/src/rebuild.rs
// Summary: Identity-gated rebuild policy (Stable / Rebuilding) for the hit overlay.

use std::sync::Arc;

use crate::domain::Domain;
use crate::series::Dataset;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RebuildState {
    Stable,
    /// Only observable between `observe` and `finish` inside one update.
    Rebuilding,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RebuildDecision {
    /// Inputs are the same objects as last time; keep the overlay.
    Reuse,
    Rebuild(RebuildReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RebuildReason {
    Mount,
    DomainChanged,
    DatasetChanged,
}

/// Tracks the last domain/dataset objects the overlay was built from.
///
/// Comparison is by `Arc` identity only. A structurally equal but freshly allocated
/// dataset still rebuilds, and mutating nothing while keeping the same `Arc` never does.
pub struct RebuildController<D> {
    state: RebuildState,
    domain: Option<Arc<Domain>>,
    dataset: Option<Arc<Dataset<D>>>,
    rebuilds: u64,
}

impl<D> Default for RebuildController<D> {
    fn default() -> Self { Self::new() }
}

impl<D> RebuildController<D> {
    pub fn new() -> Self {
        Self { state: RebuildState::Stable, domain: None, dataset: None, rebuilds: 0 }
    }

    pub fn state(&self) -> RebuildState { self.state }
    pub fn rebuilds(&self) -> u64 { self.rebuilds }

    /// Compare against the stored references; on a change, store both new ones and
    /// enter `Rebuilding`.
    pub fn observe(&mut self, domain: &Arc<Domain>, dataset: &Arc<Dataset<D>>) -> RebuildDecision {
        let reason = match (&self.domain, &self.dataset) {
            (None, _) | (_, None) => Some(RebuildReason::Mount),
            (Some(d), _) if !Arc::ptr_eq(d, domain) => Some(RebuildReason::DomainChanged),
            (_, Some(s)) if !Arc::ptr_eq(s, dataset) => Some(RebuildReason::DatasetChanged),
            _ => None,
        };
        match reason {
            Some(reason) => {
                self.domain = Some(Arc::clone(domain));
                self.dataset = Some(Arc::clone(dataset));
                self.state = RebuildState::Rebuilding;
                self.rebuilds += 1;
                tracing::debug!("rebuild: {:?} (#{})", reason, self.rebuilds);
                RebuildDecision::Rebuild(reason)
            }
            None => RebuildDecision::Reuse,
        }
    }

    /// The pipeline has run; back to `Stable`.
    pub fn finish(&mut self) {
        self.state = RebuildState::Stable;
    }

    /// Forget stored references so the next observation rebuilds.
    pub fn reset(&mut self) {
        self.domain = None;
        self.dataset = None;
        self.state = RebuildState::Stable;
    }
}
