//! Read-only display tables derived from a computed map.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::map::{MapOptions, PerceptualMap, compute_map};
use crate::perf::performance_means;
use crate::project::Project;

/// One brand's aggregated mean rating per attribute, in attribute order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMeanRow {
    pub brand: String,
    pub values: Vec<f64>,
}

/// An attribute's placed coordinate vector; the magnitude reads as how
/// strongly the attribute differentiates the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeSensitivityRow {
    pub attribute: String,
    pub loading_x: f64,
    pub loading_y: f64,
    pub magnitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceToIdealRow {
    pub brand: String,
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryTables {
    pub performance_means: Vec<PerformanceMeanRow>,
    pub attribute_sensitivity: Vec<AttributeSensitivityRow>,
    /// Empty when no ideal brand resolves.
    pub distances_to_ideal: Vec<DistanceToIdealRow>,
}

/// The map plus its display tables, ready for a results view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSummary {
    pub map: PerceptualMap,
    pub tables: SummaryTables,
}

/// Computes the map and derives the per-brand and per-attribute tables from
/// it. Attribute labels follow the project language.
pub fn compute_summary(project: &Project, options: &MapOptions) -> Result<MapSummary> {
    let map = compute_map(project, options)?;
    let perf = performance_means(project);

    let performance_means = project
        .brands
        .iter()
        .enumerate()
        .map(|(bi, brand)| PerformanceMeanRow {
            brand: brand.name.clone(),
            values: (0..project.attributes.len())
                .map(|ai| perf[(bi, ai)])
                .collect(),
        })
        .collect();

    let attribute_sensitivity = project
        .attributes
        .iter()
        .zip(&map.attr_coords)
        .map(|(attr, p)| AttributeSensitivityRow {
            attribute: attr.label(project.lang).to_string(),
            loading_x: p.x,
            loading_y: p.y,
            magnitude: p.radius(),
        })
        .collect();

    let distances_to_ideal = match map.ideal_index {
        Some(ii) => {
            let ideal = map.brand_coords[ii];
            project
                .brands
                .iter()
                .zip(&map.brand_coords)
                .map(|(brand, p)| DistanceToIdealRow {
                    brand: brand.name.clone(),
                    distance: p.distance_to(ideal),
                })
                .collect()
        }
        None => Vec::new(),
    };

    Ok(MapSummary {
        map,
        tables: SummaryTables {
            performance_means,
            attribute_sensitivity,
            distances_to_ideal,
        },
    })
}
