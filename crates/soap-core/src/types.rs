//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// One simulated particle: position and accumulated velocity, in canvas
/// coordinates (origin top-left, y down, the renderer's frame).
///
/// Identity is positional: an entity is index `i` in the store for the
/// lifetime of an epoch. Entities are created in bulk by `reset` and never
/// destroyed individually.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
}

/// A fixed repulsion source placed by the user.
///
/// Soap points never move and never expire; `reset` clears them wholesale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SoapPoint {
    pub x: f64,
    pub y: f64,
}

impl Entity {
    pub fn new(x: f64, y: f64, dx: f64, dy: f64) -> Self {
        Self { x, y, dx, dy }
    }

    /// An entity at rest, the state every lattice particle starts in.
    pub fn at_rest(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 0.0)
    }

    /// Current speed magnitude.
    pub fn speed(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }
}

impl SoapPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
