#![forbid(unsafe_code)]

//! Survey project model + perceptual-map engine (headless).
//!
//! Design goals:
//! - deterministic, testable outputs (fixed iteration counts and seeds)
//! - an engine that is a pure function of an immutable [`Project`] snapshot:
//!   no ambient state, no I/O, everything recomputed per call
//! - graceful degradation on sparse survey data; errors only for identity
//!   contract violations

pub mod error;
pub mod map;
pub mod perf;
pub mod project;
pub mod tables;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use map::{
    MapOptions, MapPoint, MapStrategy, PerceptualMap, PlacementOptions, ReferencePopulation,
    compute_map,
};
pub use perf::performance_means;
pub use project::{Attribute, Brand, Lang, Project, Response};
pub use tables::{
    AttributeSensitivityRow, DistanceToIdealRow, MapSummary, PerformanceMeanRow, SummaryTables,
    compute_summary,
};

/// Convenience wrapper bundling the pipeline options.
///
/// Callers that recompute on every project change can hold one `Engine` and
/// feed it successive snapshots; the engine itself keeps no state between
/// calls.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: MapOptions,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(mut self, strategy: MapStrategy) -> Self {
        self.options.strategy = strategy;
        self
    }

    pub fn with_reference(mut self, reference: ReferencePopulation) -> Self {
        self.options.reference = reference;
        self
    }

    pub fn with_placement(mut self, placement: PlacementOptions) -> Self {
        self.options.placement = placement;
        self
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    pub fn compute_map(&self, project: &Project) -> Result<PerceptualMap> {
        map::compute_map(project, &self.options)
    }

    pub fn compute_summary(&self, project: &Project) -> Result<MapSummary> {
        tables::compute_summary(project, &self.options)
    }
}
