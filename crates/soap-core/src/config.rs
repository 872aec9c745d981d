//! Engine configuration and the scalar bounds derived from it.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CANVAS_SIZE, DEFAULT_CIRCLE_SIZE, DEFAULT_REPULSION_STRENGTH,
    ENTITY_REPULSION_FACTOR, SOAP_RADIUS_DIVISOR,
};

/// Parameters for one simulation instance.
///
/// `canvas_size` changes on viewport resizes; the other two are fixed for
/// the life of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Side length of the square simulation bounds.
    pub canvas_size: f64,
    /// Logical particle radius unit.
    pub circle_size: f64,
    /// Force scaling constant.
    pub repulsion_strength: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            circle_size: DEFAULT_CIRCLE_SIZE,
            repulsion_strength: DEFAULT_REPULSION_STRENGTH,
        }
    }
}

impl SimConfig {
    pub fn new(canvas_size: f64, circle_size: f64, repulsion_strength: f64) -> Self {
        Self {
            canvas_size,
            circle_size,
            repulsion_strength,
        }
    }

    /// Cutoff radius for entity-entity repulsion.
    pub fn entity_repulsion_radius(&self) -> f64 {
        self.circle_size * ENTITY_REPULSION_FACTOR
    }

    /// Cutoff radius for soap repulsion. Tracks `canvas_size`, so a resize
    /// changes it immediately, before any reset.
    pub fn soap_repulsion_radius(&self) -> f64 {
        self.canvas_size / SOAP_RADIUS_DIVISOR
    }

    /// Wall clamp bounds `(low, high)`, shared by both axes.
    /// `high` falls below `low` on a degenerate canvas; the integration
    /// clamp resolves that case toward `low`.
    pub fn wall_bounds(&self) -> (f64, f64) {
        (self.circle_size, self.canvas_size - self.circle_size)
    }

    /// Side length of one lattice cell (a particle plus its clearance).
    pub fn cell_size(&self) -> f64 {
        self.circle_size * 2.0
    }
}
