//! Inline diagnostics for vectors.

use super::types::Vec2;

/// Human-readable form, four decimals per component.
pub fn fmt_vec(v: Vec2) -> String {
    format!("Vec2 {{ x: {:.4}, y: {:.4} }}", v.x, v.y)
}

/// Emit `v` as a DEBUG event (target `planar::debug`) and return it unchanged,
/// so it can sit in the middle of an expression.
#[inline]
pub fn debug(v: Vec2) -> Vec2 {
    tracing::debug!(target: "planar::debug", x = v.x, y = v.y, "{}", fmt_vec(v));
    v
}
