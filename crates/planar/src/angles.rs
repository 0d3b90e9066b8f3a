//! Angles, rotations, projection, reflection and slope.
//!
//! - `angle_between`: unsigned angle in [0, π]; the cosine is clamped before
//!   `acos` and only reported when it leaves [-1, 1] by more than
//!   `eps_domain`.
//! - `rotate_by_angle_between`: rotation by the signed angle measured from
//!   `reference` to `to_rotate` (so `X_BASIS` against `Y_BASIS` lands on `-Y`).
//! - Fallible results are checked: finite inputs whose result leaves the
//!   `f64` range fail with `Overflow` instead of returning ±∞.
//!
//! Code cross-refs: `arith::unit`, `cfg::GeomCfg`

use super::arith::{add, dot, finite_result, is_finite, magnitude, scale, unit};
use super::cfg::GeomCfg;
use super::error::{GeomError, GeomResult};
use super::types::Vec2;

/// Unsigned angle between `a` and `b`, in radians.
pub fn angle_between(a: Vec2, b: Vec2) -> GeomResult<f64> {
    angle_between_cfg(a, b, &GeomCfg::DEFAULT)
}

/// Rotate `to_rotate` counterclockwise by `theta` radians.
#[inline]
pub fn rotate_by_angle(to_rotate: Vec2, theta: f64) -> Vec2 {
    let (t_sin, t_cos) = theta.sin_cos();
    rotate_sin_cos(to_rotate, t_sin, t_cos)
}

/// Rotate `to_rotate` by the signed angle between its direction and `reference`.
pub fn rotate_by_angle_between(to_rotate: Vec2, reference: Vec2) -> GeomResult<Vec2> {
    rotate_by_angle_between_cfg(to_rotate, reference, &GeomCfg::DEFAULT)
}

/// Component of `to_project` along the direction of `onto`.
pub fn projection_onto(to_project: Vec2, onto: Vec2) -> GeomResult<Vec2> {
    projection_onto_cfg(to_project, onto, &GeomCfg::DEFAULT)
}

/// Mirror `to_reflect` across the line through the origin spanned by `along`.
pub fn reflection_along(to_reflect: Vec2, along: Vec2) -> GeomResult<Vec2> {
    reflection_along_cfg(to_reflect, along, &GeomCfg::DEFAULT)
}

/// Tangent of the angle between `v` and `reference`: |perpendicular| / |parallel|.
pub fn slope_between(v: Vec2, reference: Vec2) -> GeomResult<f64> {
    slope_between_cfg(v, reference, &GeomCfg::DEFAULT)
}

pub(crate) fn angle_between_cfg(a: Vec2, b: Vec2, cfg: &GeomCfg) -> GeomResult<f64> {
    const OP: &str = "angle_between";
    let na = unit(a, cfg, OP)?;
    let nb = unit(b, cfg, OP)?;
    let cos = clamp_cos(dot(na, nb), cfg.eps_domain, OP)?;
    Ok(cos.acos())
}

pub(crate) fn rotate_by_angle_between_cfg(
    to_rotate: Vec2,
    reference: Vec2,
    cfg: &GeomCfg,
) -> GeomResult<Vec2> {
    const OP: &str = "rotate_by_angle_between";
    let n_reference = unit(reference, cfg, OP)?;
    let n_to_rotate = unit(to_rotate, cfg, OP)?;
    let sin = -(n_to_rotate.x * n_reference.y - n_reference.x * n_to_rotate.y);
    let cos = dot(n_to_rotate, n_reference);
    finite_result(rotate_sin_cos(to_rotate, sin, cos), OP)
}

pub(crate) fn projection_onto_cfg(
    to_project: Vec2,
    onto: Vec2,
    cfg: &GeomCfg,
) -> GeomResult<Vec2> {
    const OP: &str = "projection_onto";
    let onto = unit(onto, cfg, OP)?;
    project(to_project, onto, OP)
}

pub(crate) fn reflection_along_cfg(
    to_reflect: Vec2,
    along: Vec2,
    cfg: &GeomCfg,
) -> GeomResult<Vec2> {
    const OP: &str = "reflection_along";
    let along = unit(along, cfg, OP)?;
    // -r + 2·(r·n)·n, grouped as p + (p - r) so 2·(r·n) never overflows alone
    let p = project(to_reflect, along, OP)?;
    finite_result(add(p, add(p, scale(to_reflect, -1.0))), OP)
}

pub(crate) fn slope_between_cfg(v: Vec2, reference: Vec2, cfg: &GeomCfg) -> GeomResult<f64> {
    const OP: &str = "slope_between";
    let unit_ref = unit(reference, cfg, OP)?;
    let x = project(v, unit_ref, OP)?;
    let y = add(v, scale(x, -1.0));
    let parallel = magnitude(x);
    if parallel <= cfg.eps_zero {
        tracing::trace!(op = OP, parallel, "perpendicular input");
        return Err(GeomError::DivisionByZero { op: OP });
    }
    let slope = magnitude(y) / parallel;
    if !slope.is_finite() {
        tracing::trace!(op = OP, parallel, "slope overflows");
        return Err(GeomError::Overflow { op: OP });
    }
    Ok(slope)
}

/// `(v·n)·n` for a unit `n`; non-finite `v` is degenerate, a non-finite
/// result is an overflow.
fn project(v: Vec2, n: Vec2, op: &'static str) -> GeomResult<Vec2> {
    if !is_finite(v) {
        return Err(GeomError::DegenerateInput { op });
    }
    finite_result(scale(n, dot(v, n)), op)
}

/// Apply the rotation matrix `[cos, -sin; sin, cos]`.
#[inline]
fn rotate_sin_cos(v: Vec2, sin: f64, cos: f64) -> Vec2 {
    Vec2::new(cos * v.x + -sin * v.y, sin * v.x + cos * v.y)
}

/// Clamp a cosine into [-1, 1], reporting drift beyond `eps` (and NaN).
fn clamp_cos(cos: f64, eps: f64, op: &'static str) -> GeomResult<f64> {
    if cos.is_nan() || cos.abs() > 1.0 + eps {
        return Err(GeomError::Domain { op, value: cos });
    }
    Ok(cos.clamp(-1.0, 1.0))
}
