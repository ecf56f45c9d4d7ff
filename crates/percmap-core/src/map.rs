//! The map pipeline: aggregation, standardization, layout, normalization.

use percmap_solver::{
    Point, classical_mds, euclidean_rows, normalize_joint, pca_biplot, place_attributes,
    zscore_columns,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::perf::performance_means;
use crate::project::Project;

pub use percmap_solver::PlacementOptions;

/// Which of the two historical layout algorithms to run. Both produce a
/// `PerceptualMap` in the same normalized coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapStrategy {
    /// Classical MDS over brand distances, attributes placed by the weighted
    /// centroid heuristic.
    #[default]
    ClassicalMds,
    /// PCA of the attribute covariance: brands as projections, attributes as
    /// scaled loadings.
    PcaBiplot,
}

/// Which brands contribute to the z-score statistics. The transform itself is
/// always applied to every brand, so an excluded ideal is still projected
/// against the reference population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferencePopulation {
    #[default]
    AllBrands,
    ExcludeIdeal,
}

#[derive(Debug, Clone, Default)]
pub struct MapOptions {
    pub strategy: MapStrategy,
    pub reference: ReferencePopulation,
    pub placement: PlacementOptions,
}

/// A 2D map coordinate. Serializes as a two-element `[x, y]` array, matching
/// the established project-file geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance_to(&self, other: MapPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for MapPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<MapPoint> for (f64, f64) {
    fn from(p: MapPoint) -> Self {
        (p.x, p.y)
    }
}

impl From<Point> for MapPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// The computed map: one coordinate per brand and per attribute, both sets in
/// one normalized space (max radius <= 1) so a renderer applies a single
/// linear scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerceptualMap {
    pub brand_coords: Vec<MapPoint>,
    pub attr_coords: Vec<MapPoint>,
    pub ideal_index: Option<usize>,
}

impl PerceptualMap {
    fn empty() -> Self {
        Self {
            brand_coords: Vec::new(),
            attr_coords: Vec::new(),
            ideal_index: None,
        }
    }
}

/// Runs the full pipeline on an immutable project snapshot.
///
/// Deterministic: identical inputs produce identical outputs. Sparse data
/// degrades gracefully (neutral means, epsilon floors, empty outputs); the
/// only errors are identity-contract violations in the project itself.
pub fn compute_map(project: &Project, options: &MapOptions) -> Result<PerceptualMap> {
    project.validate()?;

    let brands = project.brands.len();
    let attrs = project.attributes.len();
    if brands == 0 || attrs == 0 {
        return Ok(PerceptualMap::empty());
    }

    let ideal_index = project.ideal_index();
    tracing::debug!(
        brands,
        attrs,
        responses = project.responses.len(),
        strategy = ?options.strategy,
        "computing perceptual map"
    );

    let perf = performance_means(project);

    let reference: Vec<usize> = match options.reference {
        ReferencePopulation::AllBrands => (0..brands).collect(),
        ReferencePopulation::ExcludeIdeal => {
            (0..brands).filter(|&b| Some(b) != ideal_index).collect()
        }
    };
    let z = zscore_columns(&perf, &reference)?;

    let (mut brand_pts, mut attr_pts) = match options.strategy {
        MapStrategy::ClassicalMds => {
            // Distances and MDS run over every brand, the ideal included.
            let active: Vec<usize> = (0..brands).collect();
            let dist = euclidean_rows(&z, &active)?;
            let brand_pts = if brands >= 2 {
                classical_mds(&dist)?
            } else {
                vec![Point::ZERO; brands]
            };
            let attr_pts = place_attributes(&perf, &brand_pts, ideal_index, &options.placement)?;
            (brand_pts, attr_pts)
        }
        MapStrategy::PcaBiplot => pca_biplot(&z)?,
    };

    normalize_joint(&mut brand_pts, &mut attr_pts);

    Ok(PerceptualMap {
        brand_coords: brand_pts.into_iter().map(MapPoint::from).collect(),
        attr_coords: attr_pts.into_iter().map(MapPoint::from).collect(),
        ideal_index,
    })
}
