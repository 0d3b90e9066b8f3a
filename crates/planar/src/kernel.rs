//! `Geometry`: the kernel as one value, carrying its tolerances.
//!
//! Every method has the argument order and formula of the free function of
//! the same name; the only difference is that degeneracy and domain checks
//! read `self.cfg` instead of `GeomCfg::DEFAULT`.
//!
//! ```
//! use planar::{Geometry, Vec2, X_BASIS, Y_BASIS};
//!
//! let geo = Geometry::default();
//! let th = geo.angle_between(X_BASIS, Y_BASIS).unwrap();
//! assert!((th - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! assert!(geo.normalized(Vec2::zeros()).is_err());
//! ```

use super::angles::{
    angle_between_cfg, projection_onto_cfg, reflection_along_cfg, rotate_by_angle,
    rotate_by_angle_between_cfg, slope_between_cfg,
};
use super::arith::{self, unit};
use super::cfg::GeomCfg;
use super::debug;
use super::error::GeomResult;
use super::line::{line_through_cfg, point_on_line_with_x_cfg, point_on_line_with_y_cfg};
use super::types::{Line, Pt2, Vec2};

/// Stateless geometry kernel parameterized by tolerances.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    cfg: GeomCfg,
}

impl Geometry {
    #[inline]
    pub const fn new(cfg: GeomCfg) -> Self {
        Self { cfg }
    }

    #[inline]
    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }

    #[inline]
    pub fn motion_between(&self, end: Pt2, start: Pt2) -> Vec2 {
        arith::motion_between(end, start)
    }
    #[inline]
    pub fn move_by(&self, point: Pt2, vector: Vec2) -> Pt2 {
        arith::move_by(point, vector)
    }
    #[inline]
    pub fn midpoint(&self, point: Pt2, vector: Vec2) -> Pt2 {
        arith::midpoint(point, vector)
    }
    #[inline]
    pub fn midpoint_between(&self, a: Pt2, b: Pt2) -> Pt2 {
        arith::midpoint_between(a, b)
    }
    #[inline]
    pub fn add(&self, a: Vec2, b: Vec2) -> Vec2 {
        arith::add(a, b)
    }
    #[inline]
    pub fn scale(&self, v: Vec2, s: f64) -> Vec2 {
        arith::scale(v, s)
    }
    #[inline]
    pub fn magnitude(&self, v: Vec2) -> f64 {
        arith::magnitude(v)
    }
    #[inline]
    pub fn dot(&self, a: Vec2, b: Vec2) -> f64 {
        arith::dot(a, b)
    }

    pub fn normalized(&self, v: Vec2) -> GeomResult<Vec2> {
        unit(v, &self.cfg, "normalized")
    }
    pub fn angle_between(&self, a: Vec2, b: Vec2) -> GeomResult<f64> {
        angle_between_cfg(a, b, &self.cfg)
    }
    #[inline]
    pub fn rotate_by_angle(&self, to_rotate: Vec2, theta: f64) -> Vec2 {
        rotate_by_angle(to_rotate, theta)
    }
    pub fn rotate_by_angle_between(&self, to_rotate: Vec2, reference: Vec2) -> GeomResult<Vec2> {
        rotate_by_angle_between_cfg(to_rotate, reference, &self.cfg)
    }
    pub fn projection_onto(&self, to_project: Vec2, onto: Vec2) -> GeomResult<Vec2> {
        projection_onto_cfg(to_project, onto, &self.cfg)
    }
    pub fn reflection_along(&self, to_reflect: Vec2, along: Vec2) -> GeomResult<Vec2> {
        reflection_along_cfg(to_reflect, along, &self.cfg)
    }
    pub fn slope_between(&self, v: Vec2, reference: Vec2) -> GeomResult<f64> {
        slope_between_cfg(v, reference, &self.cfg)
    }

    pub fn line_through(&self, a: Pt2, b: Pt2) -> GeomResult<Line> {
        line_through_cfg(a, b, &self.cfg)
    }
    pub fn point_on_line_with_x(&self, line: Line, x: f64) -> GeomResult<Pt2> {
        point_on_line_with_x_cfg(line, x, &self.cfg)
    }
    pub fn point_on_line_with_y(&self, line: Line, y: f64) -> GeomResult<Pt2> {
        point_on_line_with_y_cfg(line, y, &self.cfg)
    }

    #[inline]
    pub fn debug(&self, v: Vec2) -> Vec2 {
        debug::debug(v)
    }
}
