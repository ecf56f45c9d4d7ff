//! Column-wise z-score standardization.

use nalgebra::DMatrix;

use crate::error::{Error, Result};

/// Standard deviation floor: a constant column standardizes to zeros instead
/// of dividing by zero.
const SD_EPSILON: f64 = 1e-6;

/// Z-scores every column of `m` against statistics computed over
/// `reference_rows` only.
///
/// The reference subset is a policy decision made by the caller (all brands,
/// or all brands except a benchmark). Mean and population standard deviation
/// come from the reference rows, but the transform is applied to every row,
/// so an excluded benchmark is still projected against the reference
/// population.
///
/// An empty `reference_rows` falls back to using all rows.
pub fn zscore_columns(m: &DMatrix<f64>, reference_rows: &[usize]) -> Result<DMatrix<f64>> {
    let rows = m.nrows();
    let cols = m.ncols();

    for &r in reference_rows {
        if r >= rows {
            return Err(Error::RowOutOfBounds { row: r, rows });
        }
    }

    if rows == 0 || cols == 0 {
        return Ok(m.clone());
    }

    let all_rows: Vec<usize>;
    let reference: &[usize] = if reference_rows.is_empty() {
        all_rows = (0..rows).collect();
        &all_rows
    } else {
        reference_rows
    };

    let denom = reference.len() as f64;
    let mut mean = vec![0.0; cols];
    let mut sd = vec![0.0; cols];

    for a in 0..cols {
        let mut sum = 0.0;
        for &r in reference {
            sum += m[(r, a)];
        }
        mean[a] = sum / denom;

        let mut sq = 0.0;
        for &r in reference {
            let d = m[(r, a)] - mean[a];
            sq += d * d;
        }
        let s = (sq / denom).sqrt();
        sd[a] = if s == 0.0 { SD_EPSILON } else { s };
    }

    Ok(DMatrix::from_fn(rows, cols, |r, a| {
        (m[(r, a)] - mean[a]) / sd[a]
    }))
}
