//! PCA biplot axes.
//!
//! The alternative map strategy: instead of running MDS on brand distances,
//! diagonalize the attribute covariance matrix of the standardized scores.
//! Brands are projected onto the two dominant components; attributes are the
//! component loadings, scaled into the brand cloud.

use nalgebra::DMatrix;

use crate::Point;
use crate::error::Result;
use crate::mds::{deflate, dominant_eigenpair};

/// Attribute loadings are stretched to this fraction of the largest brand
/// radius so both point sets stay readable on one plot.
const LOADING_SCALE: f64 = 0.9;

/// Sample covariance matrix of the columns of `z` (attribute x attribute).
pub fn covariance(z: &DMatrix<f64>) -> DMatrix<f64> {
    let rows = z.nrows();
    let cols = z.ncols();
    let denom = (rows.saturating_sub(1)).max(1) as f64;

    let mut out = DMatrix::<f64>::zeros(cols, cols);
    for j in 0..cols {
        for k in j..cols {
            let mut sum = 0.0;
            for b in 0..rows {
                sum += z[(b, j)] * z[(b, k)];
            }
            let v = sum / denom;
            out[(j, k)] = v;
            out[(k, j)] = v;
        }
    }
    out
}

/// Computes brand projections and scaled attribute loadings from the two
/// dominant principal components of `z`.
///
/// Returns `(brand_points, attr_points)` with one entry per row and per
/// column of `z` respectively. Degenerate inputs (no rows or no columns)
/// collapse to origins rather than failing.
pub fn pca_biplot(z: &DMatrix<f64>) -> Result<(Vec<Point>, Vec<Point>)> {
    let rows = z.nrows();
    let cols = z.ncols();
    if rows == 0 || cols == 0 {
        return Ok((vec![Point::ZERO; rows], vec![Point::ZERO; cols]));
    }

    let s = covariance(z);
    let (lambda1, v1) = dominant_eigenpair(&s);
    let s2 = deflate(&s, lambda1, &v1);
    let (_, v2) = dominant_eigenpair(&s2);

    let brands: Vec<Point> = (0..rows)
        .map(|b| {
            let row = z.row(b);
            let mut x = 0.0;
            let mut y = 0.0;
            for a in 0..cols {
                x += row[a] * v1[a];
                y += row[a] * v2[a];
            }
            Point::new(x, y)
        })
        .collect();

    let raw_attrs: Vec<Point> = (0..cols).map(|a| Point::new(v1[a], v2[a])).collect();

    let max_brand_r = brands.iter().map(Point::radius).fold(0.0, f64::max);
    let max_attr_r = raw_attrs.iter().map(Point::radius).fold(0.0, f64::max);
    let scale = if max_attr_r > 0.0 {
        max_brand_r * LOADING_SCALE / max_attr_r
    } else {
        1.0
    };

    let attrs = raw_attrs
        .into_iter()
        .map(|p| Point::new(p.x * scale, p.y * scale))
        .collect();

    Ok((brands, attrs))
}
