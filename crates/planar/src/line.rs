//! Lines through points and axis-coordinate queries.
//!
//! A query for "the point with x = c" solves `p.x + t·v.x = c` for `t`; it
//! has no unique answer when `v.x` is zero (a vertical line), and likewise
//! for y on a horizontal line. Both cases fail with `DivisionByZero`.
//! A solution that exists but does not fit in `f64` fails with `Overflow`.

use super::arith::{finite_result, is_finite, magnitude, motion_between, move_by, scale};
use super::cfg::GeomCfg;
use super::error::{GeomError, GeomResult};
use super::types::{as_point, as_vector, Line, Pt2, Vec2};

/// Line through `a` and `b`, anchored at `a` with direction `a - b`.
pub fn line_through(a: Pt2, b: Pt2) -> GeomResult<Line> {
    line_through_cfg(a, b, &GeomCfg::DEFAULT)
}

/// Point on `line` whose first coordinate is `x`.
pub fn point_on_line_with_x(line: Line, x: f64) -> GeomResult<Pt2> {
    point_on_line_with_x_cfg(line, x, &GeomCfg::DEFAULT)
}

/// Point on `line` whose second coordinate is `y`.
pub fn point_on_line_with_y(line: Line, y: f64) -> GeomResult<Pt2> {
    point_on_line_with_y_cfg(line, y, &GeomCfg::DEFAULT)
}

pub(crate) fn line_through_cfg(a: Pt2, b: Pt2, cfg: &GeomCfg) -> GeomResult<Line> {
    const OP: &str = "line_through";
    if !(is_finite(as_vector(a)) && is_finite(as_vector(b))) {
        return Err(GeomError::DegenerateInput { op: OP });
    }
    let v = motion_between(a, b);
    if !is_finite(v) {
        tracing::trace!(ax = a.x, ay = a.y, bx = b.x, by = b.y, "direction overflows");
        return Err(GeomError::Overflow { op: OP });
    }
    if magnitude(v) <= cfg.eps_zero {
        tracing::trace!(ax = a.x, ay = a.y, bx = b.x, by = b.y, "coincident points");
        return Err(GeomError::DegenerateInput { op: OP });
    }
    Ok(Line { p: a, v })
}

pub(crate) fn point_on_line_with_x_cfg(line: Line, x: f64, cfg: &GeomCfg) -> GeomResult<Pt2> {
    solve_axis(line, 0, x, cfg, "point_on_line_with_x")
}

pub(crate) fn point_on_line_with_y_cfg(line: Line, y: f64, cfg: &GeomCfg) -> GeomResult<Pt2> {
    solve_axis(line, 1, y, cfg, "point_on_line_with_y")
}

/// Solve `line.p[axis] + t·line.v[axis] = target` and return `p + t·v`.
fn solve_axis(
    line: Line,
    axis: usize,
    target: f64,
    cfg: &GeomCfg,
    op: &'static str,
) -> GeomResult<Pt2> {
    if !(is_finite(as_vector(line.p)) && is_finite(line.v) && target.is_finite()) {
        return Err(GeomError::DegenerateInput { op });
    }
    let step = line.v[axis];
    if step.abs() <= cfg.eps_axis {
        tracing::trace!(op, step, "line parallel to queried axis");
        return Err(GeomError::DivisionByZero { op });
    }
    let scaling = (target - line.p[axis]) / step;
    let q = move_by(line.p, scale(line.v, scaling));
    finite_result(as_vector(q), op).map(as_point)
}

impl Line {
    #[inline]
    pub fn new(p: Pt2, v: Vec2) -> Self {
        Self { p, v }
    }

    /// `p + t·v`.
    #[inline]
    pub fn point_at(&self, t: f64) -> Pt2 {
        move_by(self.p, scale(self.v, t))
    }

    #[inline]
    pub fn point_with_x(&self, x: f64) -> GeomResult<Pt2> {
        point_on_line_with_x(*self, x)
    }

    #[inline]
    pub fn point_with_y(&self, y: f64) -> GeomResult<Pt2> {
        point_on_line_with_y(*self, y)
    }
}
