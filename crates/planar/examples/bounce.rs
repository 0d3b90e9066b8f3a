//! Bounce a ray off a tilted wall and report where it crosses the axes.
//!
//! Usage:
//!   cargo run -p planar --example bounce
//!   cargo run -p planar --example bounce -- 0.4
//!
//! The optional argument is the wall tilt in radians (default π/6).

use anyhow::{Context, Result};
use planar::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let tilt: f64 = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("tilt must be a number, got {arg:?}"))?,
        None => std::f64::consts::FRAC_PI_6,
    };

    let wall = rotate_by_angle(X_BASIS, tilt);
    let incoming = Vec2::new(1.0, -1.0);
    let outgoing = debug(reflection_along(incoming, wall)?);
    let turn = angle_between(incoming, outgoing)?;
    tracing::info!(tilt, turn, "reflected");

    let hit = Pt2::new(2.0, 1.0);
    let ray = line_through(move_by(hit, outgoing), hit)?;
    match ray.point_with_y(0.0) {
        Ok(q) => tracing::info!(x = q.x, "crosses y = 0"),
        Err(e) => tracing::warn!(error = %e, "never crosses y = 0"),
    }
    match ray.point_with_x(0.0) {
        Ok(q) => tracing::info!(y = q.y, "crosses x = 0"),
        Err(e) => tracing::warn!(error = %e, "never crosses x = 0"),
    }
    Ok(())
}
