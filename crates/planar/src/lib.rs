//! Small 2D geometry kernel: vector and point arithmetic, angles,
//! projection/reflection, and line queries.
//!
//! Conventions
//! - `Vec2` is a displacement, `Pt2` a location; both are nalgebra types and
//!   are not interchangeable (`as_point` / `as_vector` convert explicitly).
//! - Operations are pure free functions. Fallible ones return `GeomResult`
//!   and never hand back NaN or ±∞ for finite input; a result outside the
//!   `f64` range is `GeomError::Overflow`. Infallible arithmetic (`add`,
//!   `scale`, `rotate_by_angle`, ...) follows plain IEEE semantics.
//! - `Geometry` bundles the same operations with configurable tolerances.
//!
//! Module map
//! - `types`: `Vec2`, `Pt2`, `Line`, `X_BASIS`, `Y_BASIS`.
//! - `arith`: construction, arithmetic, magnitude, normalization.
//! - `angles`: angle, rotations, projection, reflection, slope.
//! - `line`: lines through points and axis-coordinate queries.
//! - `kernel`: the `Geometry` facade. `cfg`, `error`, `debug`: ambient bits.

pub mod angles;
pub mod arith;
pub mod cfg;
pub mod debug;
pub mod error;
pub mod kernel;
pub mod line;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use angles::{
    angle_between, projection_onto, reflection_along, rotate_by_angle, rotate_by_angle_between,
    slope_between,
};
pub use arith::{
    add, dot, magnitude, midpoint, midpoint_between, motion_between, move_by, normalized, scale,
};
pub use cfg::GeomCfg;
pub use debug::{debug, fmt_vec};
pub use error::{GeomError, GeomResult};
pub use kernel::Geometry;
pub use line::{line_through, point_on_line_with_x, point_on_line_with_y};
pub use types::{as_point, as_vector, Line, Pt2, Vec2, X_BASIS, Y_BASIS};

/// Common exports for quick glob imports in callers.
pub mod prelude {
    pub use crate::angles::*;
    pub use crate::arith::*;
    pub use crate::line::*;
    pub use crate::{
        as_point, as_vector, debug, GeomCfg, GeomError, GeomResult, Geometry, Line, Pt2, Vec2,
        X_BASIS, Y_BASIS,
    };
}

#[cfg(test)]
mod tests_props;
