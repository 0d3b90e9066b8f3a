//! Tolerance defaults for the 2D kernel.
//!
//! Policy
//! - Degeneracy checks are exact by default: only a true zero (or a
//!   non-finite value) is rejected. Callers that want a looser notion of
//!   "zero" build a `GeomCfg` and go through `Geometry`.
//! - `eps_domain` only governs how far a cosine may drift past ±1 before it
//!   is reported instead of clamped.

/// Magnitude at or below which a vector counts as degenerate.
pub const EPS_ZERO: f64 = 0.0;
/// Direction component at or below which a line query has no unique solution.
pub const EPS_AXIS: f64 = 0.0;
/// Round-off allowance for cosines fed to `acos`.
pub const EPS_DOMAIN: f64 = 1e-9;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_zero: f64,
    pub eps_axis: f64,
    pub eps_domain: f64,
}

impl GeomCfg {
    pub const DEFAULT: GeomCfg = GeomCfg {
        eps_zero: EPS_ZERO,
        eps_axis: EPS_AXIS,
        eps_domain: EPS_DOMAIN,
    };
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self::DEFAULT
    }
}
