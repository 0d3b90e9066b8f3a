//! Errors surfaced by the kernel.
//!
//! Every fallible operation fails fast with a `GeomError` instead of handing
//! back NaN or ±∞. `op` names the operation that rejected its input.

use thiserror::Error;

/// Violated precondition of a kernel operation.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum GeomError {
    /// A direction vector was zero, an input was non-finite, or two points coincided.
    #[error("{op}: degenerate input (zero direction or non-finite value)")]
    DegenerateInput { op: &'static str },
    /// A divisor along the queried axis (or a parallel component) was zero.
    #[error("{op}: division by zero")]
    DivisionByZero { op: &'static str },
    /// A cosine drifted outside [-1, 1] by more than the configured tolerance.
    #[error("{op}: cosine {value} outside [-1, 1]")]
    Domain { op: &'static str, value: f64 },
    /// Finite inputs whose result does not fit in a finite `f64`.
    #[error("{op}: result overflows f64")]
    Overflow { op: &'static str },
}

impl GeomError {
    /// Name of the operation that failed.
    pub fn op(&self) -> &'static str {
        match *self {
            GeomError::DegenerateInput { op }
            | GeomError::DivisionByZero { op }
            | GeomError::Overflow { op }
            | GeomError::Domain { op, .. } => op,
        }
    }
}

pub type GeomResult<T> = Result<T, GeomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_operation() {
        let e = GeomError::DegenerateInput { op: "normalized" };
        assert!(e.to_string().starts_with("normalized:"));
        assert_eq!(e.op(), "normalized");

        let e = GeomError::Domain {
            op: "angle_between",
            value: 1.5,
        };
        assert!(e.to_string().contains("1.5"));
        assert_eq!(e.op(), "angle_between");

        let e = GeomError::Overflow {
            op: "reflection_along",
        };
        assert!(e.to_string().contains("overflows"));
        assert_eq!(e.op(), "reflection_along");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<GeomError>();
    }
}
