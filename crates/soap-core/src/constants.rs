//! Simulation constants and default tuning parameters.

/// Default side length of the square canvas, in canvas units.
/// The frontend resizes this to the viewport before first use.
pub const DEFAULT_CANVAS_SIZE: f64 = 400.0;

/// Default logical particle radius unit.
pub const DEFAULT_CIRCLE_SIZE: f64 = 3.0;

/// Default force scaling constant.
pub const DEFAULT_REPULSION_STRENGTH: f64 = 0.0005;

// --- Repulsion radii ---

/// Entity-entity repulsion reaches out to `circle_size * ENTITY_REPULSION_FACTOR`.
pub const ENTITY_REPULSION_FACTOR: f64 = 3.0;

/// Soap repulsion reaches out to `canvas_size / SOAP_RADIUS_DIVISOR`,
/// larger than the entity radius and tracking the canvas bound.
pub const SOAP_RADIUS_DIVISOR: f64 = 8.0;

// --- Lattice ---

/// Grid-index step of the startup lattice: every other cell in both axes.
pub const LATTICE_STRIDE: usize = 2;
