//! Rating aggregation.

use nalgebra::DMatrix;

use crate::project::Project;

/// Scale midpoint used when a brand/attribute pair has no observed ratings.
/// Silent neutral defaulting is the defined policy for sparse surveys, not an
/// error.
const NEUTRAL_MEAN: f64 = 3.0;

/// Reverses a raw 1-5 rating for attributes where lower is better.
fn effective_rating(raw: u8, reversed: bool) -> f64 {
    if reversed {
        6.0 - f64::from(raw)
    } else {
        f64::from(raw)
    }
}

/// Reduces the raw responses to a dense brands x attributes matrix of mean
/// effective ratings.
///
/// Only observed ratings enter each mean; a pair nobody rated aggregates to
/// the neutral midpoint 3.0.
pub fn performance_means(project: &Project) -> DMatrix<f64> {
    let brands = project.brands.len();
    let attrs = project.attributes.len();

    let mut sum = DMatrix::<f64>::zeros(brands, attrs);
    let mut cnt = DMatrix::<f64>::zeros(brands, attrs);

    for response in &project.responses {
        for (bi, brand) in project.brands.iter().enumerate() {
            let Some(rated) = response.performance.get(&brand.name) else {
                continue;
            };
            for (ai, attr) in project.attributes.iter().enumerate() {
                if let Some(&raw) = rated.get(&attr.id) {
                    sum[(bi, ai)] += effective_rating(raw, attr.reversed);
                    cnt[(bi, ai)] += 1.0;
                }
            }
        }
    }

    DMatrix::from_fn(brands, attrs, |bi, ai| {
        if cnt[(bi, ai)] > 0.0 {
            sum[(bi, ai)] / cnt[(bi, ai)]
        } else {
            NEUTRAL_MEAN
        }
    })
}
