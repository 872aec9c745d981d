//! Velocity integration and wall clamping.
//!
//! Forces feed velocity, velocity feeds position, and the new position is
//! pinned inside the walls. Velocity itself is never damped or reflected;
//! a particle pressed against a wall keeps accumulating speed into it.

use soap_core::config::SimConfig;

/// Advance one step: `velocity += force; next = prev + velocity`, with the
/// result clamped to the wall bounds.
///
/// `x` and `y` share the same square bounds, so one pass over the
/// interleaved buffers covers both components. `min`-then-`max` resolves a
/// degenerate canvas (high bound below low) toward the low wall instead of
/// panicking, which `f64::clamp` would do.
pub fn advance(
    positions: &[f64],
    forces: &[f64],
    velocities: &mut [f64],
    next: &mut [f64],
    config: &SimConfig,
) {
    let (low, high) = config.wall_bounds();
    for k in 0..velocities.len() {
        velocities[k] += forces[k];
        next[k] = (positions[k] + velocities[k]).min(high).max(low);
    }
}
