//! Property tests for the kernel invariants.
//!
//! Geometric identities draw inputs from a bounded box so absolute tolerances
//! scaled by the input magnitude are meaningful. The finiteness properties
//! draw from the whole finite `f64` range, subnormals included.

use super::*;
use proptest::prelude::*;

fn vec2() -> impl Strategy<Value = Vec2> {
    (-1e3f64..1e3, -1e3f64..1e3).prop_map(|(x, y)| Vec2::new(x, y))
}

fn nonzero_vec2() -> impl Strategy<Value = Vec2> {
    vec2().prop_filter("non-degenerate direction", |v| v.norm() > 1e-6)
}

fn any_finite() -> impl Strategy<Value = f64> {
    use proptest::num::f64::{NEGATIVE, NORMAL, POSITIVE, SUBNORMAL, ZERO};
    POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | ZERO
}

fn wide_vec2() -> impl Strategy<Value = Vec2> {
    (any_finite(), any_finite()).prop_map(|(x, y)| Vec2::new(x, y))
}

fn finite_or_err(r: GeomResult<Vec2>) -> bool {
    r.map_or(true, |v| v.x.is_finite() && v.y.is_finite())
}

fn tol(v: Vec2) -> f64 {
    1e-9 * (1.0 + v.norm())
}

proptest! {
    #[test]
    fn normalized_has_unit_length(v in nonzero_vec2()) {
        let n = normalized(v).unwrap();
        prop_assert!((magnitude(n) - 1.0).abs() < 1e-12, "|n| = {}", magnitude(n));
    }

    #[test]
    fn dot_commutes(a in vec2(), b in vec2()) {
        prop_assert_eq!(dot(a, b), dot(b, a));
    }

    #[test]
    fn rotation_preserves_length(v in vec2(), theta in -10.0f64..10.0) {
        let r = rotate_by_angle(v, theta);
        prop_assert!((magnitude(r) - magnitude(v)).abs() < tol(v));
    }

    #[test]
    fn rotation_roundtrip(v in vec2(), theta in -10.0f64..10.0) {
        let back = rotate_by_angle(rotate_by_angle(v, theta), -theta);
        prop_assert!((back - v).norm() < tol(v), "{} vs {}", fmt_vec(back), fmt_vec(v));
    }

    #[test]
    fn reflection_is_self_inverse(a in vec2(), b in nonzero_vec2()) {
        let twice = reflection_along(reflection_along(a, b).unwrap(), b).unwrap();
        prop_assert!((twice - a).norm() < tol(a));
    }

    #[test]
    fn angle_in_closed_range(a in nonzero_vec2(), b in nonzero_vec2()) {
        let th = angle_between(a, b).unwrap();
        prop_assert!((0.0..=std::f64::consts::PI).contains(&th));
        prop_assert!((th - angle_between(b, a).unwrap()).abs() < 1e-12);
    }

    #[test]
    fn rotate_between_preserves_length(a in nonzero_vec2(), b in nonzero_vec2()) {
        let r = rotate_by_angle_between(a, b).unwrap();
        prop_assert!((magnitude(r) - magnitude(a)).abs() < tol(a));
    }

    #[test]
    fn line_queries_land_on_line(
        a in vec2(),
        b in vec2(),
        x in -1e3f64..1e3,
    ) {
        let (pa, pb) = (as_point(a), as_point(b));
        prop_assume!((a.x - b.x).abs() > 1e-3);
        let line = line_through(pa, pb).unwrap();
        let q = point_on_line_with_x(line, x).unwrap();
        prop_assert!((q.x - x).abs() < 1e-6);
        // q - a is parallel to the direction
        let d = motion_between(q, pa);
        let cross = d.x * line.v.y - d.y * line.v.x;
        prop_assert!(cross.abs() < 1e-6 * (1.0 + d.norm() * line.v.norm()));
    }
}

proptest! {
    #[test]
    fn nonzero_finite_always_normalizes(v in wide_vec2()) {
        prop_assume!(v != Vec2::zeros());
        let n = normalized(v);
        prop_assert!(n.is_ok(), "{:?} -> {:?}", v, n);
        let n = n.unwrap();
        prop_assert!((magnitude(n) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn fallible_ops_never_return_non_finite(a in wide_vec2(), b in wide_vec2(), t in any_finite()) {
        prop_assert!(finite_or_err(projection_onto(a, b)));
        prop_assert!(finite_or_err(reflection_along(a, b)));
        prop_assert!(finite_or_err(rotate_by_angle_between(a, b)));
        prop_assert!(angle_between(a, b).map_or(true, |th| (0.0..=std::f64::consts::PI).contains(&th)));
        prop_assert!(slope_between(a, b).map_or(true, |s| s.is_finite() && s >= 0.0));
        match line_through(as_point(a), as_point(b)) {
            Ok(line) => {
                prop_assert!(finite_or_err(point_on_line_with_x(line, t).map(as_vector)));
                prop_assert!(finite_or_err(point_on_line_with_y(line, t).map(as_vector)));
            }
            Err(e) => prop_assert!(
                a == b || matches!(e, GeomError::Overflow { .. }),
                "{:?} for distinct points", e
            ),
        }
    }

    #[test]
    fn only_zero_directions_are_degenerate(a in wide_vec2(), b in wide_vec2()) {
        let degenerate = |r: GeomResult<Vec2>| matches!(r, Err(GeomError::DegenerateInput { .. }));
        let zero = b == Vec2::zeros();
        prop_assert_eq!(degenerate(projection_onto(a, b)), zero);
        prop_assert_eq!(degenerate(reflection_along(a, b)), zero);
    }
}
