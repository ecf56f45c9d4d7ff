//! Joint unit-disk normalization.

use crate::Point;

/// Radius floor so an all-origin layout divides by a constant instead of
/// zero.
const RADIUS_EPSILON: f64 = 1e-6;

/// Rescales both point sets by the largest radius found across their union,
/// fitting the whole layout into the unit disk while preserving angles and
/// relative distances.
///
/// Brands and attributes must be normalized together; scaling either set on
/// its own would break the shared-coordinate-space contract renderers rely
/// on.
pub fn normalize_joint(brands: &mut [Point], attrs: &mut [Point]) {
    let mut max_r = RADIUS_EPSILON;
    for p in brands.iter().chain(attrs.iter()) {
        let r = p.radius();
        if r > max_r {
            max_r = r;
        }
    }

    for p in brands.iter_mut().chain(attrs.iter_mut()) {
        p.x /= max_r;
        p.y /= max_r;
    }
}
