//! Construction, arithmetic, magnitude and normalization.
//!
//! Everything here is infallible except `normalized`, which is also the
//! gate every direction-consuming operation goes through (`unit`).

use super::cfg::GeomCfg;
use super::error::{GeomError, GeomResult};
use super::types::{as_vector, Pt2, Vec2};

/// Displacement that takes `start` to `end` (`end - start`).
#[inline]
pub fn motion_between(end: Pt2, start: Pt2) -> Vec2 {
    end - start
}

/// Point reached by moving `point` along `vector`.
#[inline]
pub fn move_by(point: Pt2, vector: Vec2) -> Pt2 {
    point + vector
}

/// Average of `point` and the coordinates carried by `vector`.
///
/// The second argument is read as the coordinates of a point; use
/// `midpoint_between` when both ends are already `Pt2`.
#[inline]
pub fn midpoint(point: Pt2, vector: Vec2) -> Pt2 {
    Pt2::new(point.x / 2.0 + vector.x / 2.0, point.y / 2.0 + vector.y / 2.0)
}

/// Midpoint of the segment `a`–`b`.
#[inline]
pub fn midpoint_between(a: Pt2, b: Pt2) -> Pt2 {
    midpoint(a, as_vector(b))
}

/// Componentwise sum.
#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    a + b
}

/// Componentwise product with `s`.
#[inline]
pub fn scale(v: Vec2, s: f64) -> Vec2 {
    v * s
}

/// Euclidean norm, `sqrt(x² + y²)` without intermediate overflow or underflow.
///
/// Only infinite when the true norm exceeds `f64::MAX`.
#[inline]
pub fn magnitude(v: Vec2) -> f64 {
    v.x.hypot(v.y)
}

/// Inner product.
#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// `v / |v|`; fails for the zero vector.
pub fn normalized(v: Vec2) -> GeomResult<Vec2> {
    unit(v, &GeomCfg::DEFAULT, "normalized")
}

/// Normalize `v`, rejecting magnitudes `<= cfg.eps_zero` and non-finite input.
///
/// `v` is first divided by its largest absolute component, so the result is
/// finite for every finite non-zero `v`, subnormals and `f64::MAX` included.
pub(crate) fn unit(v: Vec2, cfg: &GeomCfg, op: &'static str) -> GeomResult<Vec2> {
    let m = v.amax();
    if !is_finite(v) || m == 0.0 || magnitude(v) <= cfg.eps_zero {
        tracing::trace!(op, x = v.x, y = v.y, "degenerate direction");
        return Err(GeomError::DegenerateInput { op });
    }
    let w = v / m;
    Ok(w / magnitude(w))
}

#[inline]
pub(crate) fn is_finite(v: Vec2) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

/// Pass `v` through if both components are finite, otherwise `Overflow`.
pub(crate) fn finite_result(v: Vec2, op: &'static str) -> GeomResult<Vec2> {
    if !is_finite(v) {
        tracing::trace!(op, x = v.x, y = v.y, "result overflows");
        return Err(GeomError::Overflow { op });
    }
    Ok(v)
}
