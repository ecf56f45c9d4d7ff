//! Attribute placement.
//!
//! A hand-tuned heuristic, not a statistical projection: each attribute
//! starts at a performance-weighted centroid of the brand cloud, gets nudged
//! along the direction toward the ideal brand by how much the ideal outscores
//! the pack, then close pairs are pushed apart over a few relaxation passes.

use nalgebra::DMatrix;

use crate::Point;
use crate::error::{Error, Result};

/// Floor applied to `score - 1` so a minimum rating still carries weight.
const WEIGHT_FLOOR: f64 = 1e-4;

/// Floor applied to a pair distance before computing the separation
/// direction.
const DIST_EPSILON: f64 = 1e-6;

/// Tunable placement policy.
#[derive(Debug, Clone)]
pub struct PlacementOptions {
    /// Exponent on the per-brand weight `max(score - 1, floor)`. Sub-linear
    /// values keep mid-range performers pulling noticeably.
    pub weight_gamma: f64,
    /// Multiplier pushing attribute base positions outward from the brand
    /// cloud.
    pub stretch: f64,
    /// Gain on the offset along the ideal direction per point of score
    /// difference.
    pub beta_ideal: f64,
    /// Minimum desired distance between attribute points, in pre-normalization
    /// map units.
    pub repel_radius: f64,
    /// Fraction of the overlap recovered per relaxation pass.
    pub repel_strength: f64,
    /// Number of relaxation passes.
    pub relax_passes: usize,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            weight_gamma: 0.5,
            stretch: 1.15,
            beta_ideal: 1.0,
            repel_radius: 7.0,
            repel_strength: 0.7,
            relax_passes: 3,
        }
    }
}

/// Positions one point per attribute from the mean-performance matrix
/// (brands x attributes) and the laid-out brand coordinates.
///
/// `ideal_index` outside the brand range is treated as no ideal brand.
pub fn place_attributes(
    perf: &DMatrix<f64>,
    brand_coords: &[Point],
    ideal_index: Option<usize>,
    opts: &PlacementOptions,
) -> Result<Vec<Point>> {
    let brands = perf.nrows();
    let attrs = perf.ncols();

    if brand_coords.len() != brands {
        return Err(Error::BrandCountMismatch {
            expected: brands,
            actual: brand_coords.len(),
        });
    }

    let mut out = vec![Point::ZERO; attrs];
    if attrs == 0 || brands == 0 {
        return Ok(out);
    }

    let ideal = ideal_index.filter(|&i| i < brands);

    // Centroid of the non-ideal brands, and the unit direction from it toward
    // the ideal brand.
    let mut center = Point::ZERO;
    let mut center_cnt = 0usize;
    for (b, p) in brand_coords.iter().enumerate() {
        if ideal == Some(b) {
            continue;
        }
        center.x += p.x;
        center.y += p.y;
        center_cnt += 1;
    }
    if center_cnt > 0 {
        center.x /= center_cnt as f64;
        center.y /= center_cnt as f64;
    }

    let mut dir = Point::ZERO;
    if let Some(i) = ideal {
        dir.x = brand_coords[i].x - center.x;
        dir.y = brand_coords[i].y - center.y;
        let len = dir.radius();
        let len = if len == 0.0 { 1.0 } else { len };
        dir.x /= len;
        dir.y /= len;
    }

    for a in 0..attrs {
        let mut cx = 0.0;
        let mut cy = 0.0;
        let mut sum_w = 0.0;

        let mut sum_others = 0.0;
        let mut cnt_others = 0usize;

        for b in 0..brands {
            if ideal == Some(b) {
                continue;
            }
            let score = perf[(b, a)];
            let w = (score - 1.0).max(WEIGHT_FLOOR).powf(opts.weight_gamma);

            cx += w * brand_coords[b].x;
            cy += w * brand_coords[b].y;
            sum_w += w;

            sum_others += score;
            cnt_others += 1;
        }

        if sum_w > 0.0 {
            cx /= sum_w;
            cy /= sum_w;
        }

        // Offset along the ideal direction by how far the ideal brand sits
        // above or below the pack on this attribute.
        let mut offset = Point::ZERO;
        if let Some(i) = ideal {
            if cnt_others > 0 {
                let mean_others = sum_others / cnt_others as f64;
                let diff = perf[(i, a)] - mean_others;
                offset.x = dir.x * diff * opts.beta_ideal;
                offset.y = dir.y * diff * opts.beta_ideal;
            }
        }

        out[a] = Point::new(cx * opts.stretch + offset.x, cy * opts.stretch + offset.y);
    }

    relax_overlaps(
        &mut out,
        opts.repel_radius,
        opts.repel_strength,
        opts.relax_passes,
    );

    Ok(out)
}

/// Pushes pairs closer than `radius` apart, symmetrically along their
/// connecting line, over `passes` sweeps.
///
/// Pairs already at or beyond the radius are left untouched. Points are
/// updated in place within a pass, so the sweep order is part of the output
/// contract.
pub fn relax_overlaps(points: &mut [Point], radius: f64, strength: f64, passes: usize) {
    for _ in 0..passes {
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let mut dx = points[j].x - points[i].x;
                let mut dy = points[j].y - points[i].y;
                let dist = dx.hypot(dy).max(DIST_EPSILON);

                if dist < radius {
                    let force = (radius - dist) / radius * strength;
                    dx /= dist;
                    dy /= dist;

                    points[i].x -= dx * force;
                    points[i].y -= dy * force;
                    points[j].x += dx * force;
                    points[j].y += dy * force;
                }
            }
        }
    }
}
