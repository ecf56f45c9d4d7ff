//! Pairwise Euclidean distance matrices.

use nalgebra::DMatrix;

use crate::error::{Error, Result};

/// Builds the symmetric distance matrix between the selected rows of `z`.
///
/// Output is `rows.len() x rows.len()` with a zero diagonal;
/// `out[(i, j)] == out[(j, i)]` holds exactly because each pair is computed
/// once and mirrored.
pub fn euclidean_rows(z: &DMatrix<f64>, rows: &[usize]) -> Result<DMatrix<f64>> {
    for &r in rows {
        if r >= z.nrows() {
            return Err(Error::RowOutOfBounds {
                row: r,
                rows: z.nrows(),
            });
        }
    }

    let n = rows.len();
    let mut out = DMatrix::<f64>::zeros(n, n);

    for i in 0..n {
        for j in (i + 1)..n {
            let mut sum = 0.0;
            for a in 0..z.ncols() {
                let d = z[(rows[i], a)] - z[(rows[j], a)];
                sum += d * d;
            }
            let d = sum.sqrt();
            out[(i, j)] = d;
            out[(j, i)] = d;
        }
    }

    Ok(out)
}
