//! Value types of the kernel.
//!
//! - `Vec2`: a displacement. `Pt2`: a location. Both are nalgebra types, so
//!   `Pt2 - Pt2 = Vec2` and `Pt2 + Vec2 = Pt2` hold, and a point cannot be
//!   passed where a vector is expected.
//! - `Line`: anchor point plus (non-normalized) direction.
//!
//! Code cross-refs: `line::{line_through, point_on_line_with_x}`

use nalgebra::{Point2, Vector2};

pub type Vec2 = Vector2<f64>;
pub type Pt2 = Point2<f64>;

/// Unit vector along the first axis.
pub const X_BASIS: Vec2 = Vector2::new(1.0, 0.0);
/// Unit vector along the second axis.
pub const Y_BASIS: Vec2 = Vector2::new(0.0, 1.0);

/// Reinterpret a displacement from the origin as the point it reaches.
#[inline]
pub fn as_point(v: Vec2) -> Pt2 {
    Pt2::from(v)
}

/// Displacement from the origin to `p`.
#[inline]
pub fn as_vector(p: Pt2) -> Vec2 {
    p.coords
}

/// Line `{ p + t·v : t ∈ R }`.
///
/// Invariants:
/// - `v` is not normalized. `Line::new` accepts any `v`; line queries reject
///   a zero component along the queried axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub p: Pt2,
    pub v: Vec2,
}
