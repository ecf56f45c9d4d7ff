//! Classical multidimensional scaling.
//!
//! Recovers 2D coordinates from a symmetric distance matrix: square the
//! distances, double-center them into a Gram matrix, then pull out the two
//! dominant eigenpairs by power iteration with deflation. Negative
//! eigenvalues (non-Euclidean input) contribute nothing instead of failing.

use nalgebra::{DMatrix, DVector};

use crate::Point;
use crate::error::{Error, Result};

const POWER_ITERATIONS: usize = 100;

/// Double-centers a squared-distance matrix into an inner-product (Gram)
/// matrix: `B[i][j] = -0.5 * (d2[i][j] - rowMean[i] - colMean[j] + grandMean)`.
///
/// Row and column sums of the result are zero up to rounding.
pub fn double_center(d2: &DMatrix<f64>) -> DMatrix<f64> {
    let rows = d2.nrows();
    let cols = d2.ncols();
    if rows == 0 || cols == 0 {
        return d2.clone();
    }

    let mut row_mean = vec![0.0; rows];
    let mut col_mean = vec![0.0; cols];
    let mut grand = 0.0;

    for i in 0..rows {
        for j in 0..cols {
            let v = d2[(i, j)];
            row_mean[i] += v;
            col_mean[j] += v;
            grand += v;
        }
    }
    for m in &mut row_mean {
        *m /= cols as f64;
    }
    for m in &mut col_mean {
        *m /= rows as f64;
    }
    grand /= (rows * cols) as f64;

    DMatrix::from_fn(rows, cols, |i, j| {
        -0.5 * (d2[(i, j)] - row_mean[i] - col_mean[j] + grand)
    })
}

/// Extracts the dominant eigenpair of a symmetric matrix by power iteration.
///
/// The start vector is the uniform unit vector. A centered Gram matrix has
/// zero row sums, so it can annihilate the uniform vector exactly; when a
/// multiply lands on a numerically zero vector and the matrix itself is
/// nonzero, the iteration reseeds from the next standard basis vector (a
/// nonzero matrix cannot annihilate every basis vector). All seeds are fixed,
/// keeping the result deterministic, and an all-zero matrix stops early with
/// a zero eigenvalue.
pub fn dominant_eigenpair(b: &DMatrix<f64>) -> (f64, DVector<f64>) {
    let n = b.nrows();
    if n == 0 {
        return (0.0, DVector::zeros(0));
    }

    let mut v = DVector::from_element(n, 1.0 / (n as f64).sqrt());
    let mut lambda = 0.0;
    let mut reseeds = 0;

    let mut it = 0;
    while it < POWER_ITERATIONS {
        it += 1;
        let bv = b * &v;
        let norm = bv.norm();
        if norm == 0.0 {
            if reseeds < n && b.amax() != 0.0 {
                v = DVector::zeros(n);
                v[reseeds] = 1.0;
                reseeds += 1;
                continue;
            }
            break;
        }
        v = &bv / norm;
        lambda = v.dot(&bv);
    }

    (lambda, v)
}

/// Removes a found eigenpair's contribution so the next power iteration
/// converges to the next-largest eigenpair.
pub fn deflate(b: &DMatrix<f64>, lambda: f64, v: &DVector<f64>) -> DMatrix<f64> {
    b - (v * v.transpose()) * lambda
}

/// Classical MDS over a symmetric nonnegative distance matrix.
///
/// Returns one coordinate per row. An empty matrix yields an empty vector; a
/// single point or an all-zero matrix collapses to the origin.
pub fn classical_mds(dist: &DMatrix<f64>) -> Result<Vec<Point>> {
    if dist.nrows() != dist.ncols() {
        return Err(Error::NonSquareDistance {
            rows: dist.nrows(),
            cols: dist.ncols(),
        });
    }

    let n = dist.nrows();
    if n == 0 {
        return Ok(Vec::new());
    }

    let d2 = dist.map(|d| d * d);
    let b = double_center(&d2);

    let (lambda1, v1) = dominant_eigenpair(&b);
    let b2 = deflate(&b, lambda1, &v1);
    let (lambda2, v2) = dominant_eigenpair(&b2);

    let s1 = if lambda1 > 0.0 { lambda1.sqrt() } else { 0.0 };
    let s2 = if lambda2 > 0.0 { lambda2.sqrt() } else { 0.0 };

    Ok((0..n)
        .map(|i| Point::new(v1[i] * s1, v2[i] * s2))
        .collect())
}
