//! Entity storage: flat interleaved buffers shaped for the renderer.
//!
//! Positions live in one contiguous `[x0, y0, x1, y1, ..]` array, the same
//! buffer the position export hands out, so publishing a tick needs no
//! gather pass. A scratch array of the same shape receives each step's
//! integration output before it is copied back.

use soap_core::types::Entity;

/// Fixed-size particle storage for one epoch.
///
/// Entity identity is positional: index `i` means the same particle from one
/// `reset` to the next. There is no per-entity insert or delete; the whole
/// population is regenerated wholesale.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    /// Published positions, interleaved `[x0, y0, x1, y1, ..]`. The position
    /// export points into this buffer.
    positions: Vec<f64>,
    /// Velocities, interleaved to match `positions` index-for-index.
    velocities: Vec<f64>,
    /// Integration output for the step in progress.
    scratch: Vec<f64>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entities.
    pub fn count(&self) -> usize {
        self.positions.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of entity `index`. Panics past `count()`; callers are
    /// internal and required to stay in range.
    pub fn position_of(&self, index: usize) -> (f64, f64) {
        (self.positions[2 * index], self.positions[2 * index + 1])
    }

    /// Velocity of entity `index`. Panics past `count()`.
    pub fn velocity_of(&self, index: usize) -> (f64, f64) {
        (self.velocities[2 * index], self.velocities[2 * index + 1])
    }

    /// Entity `index` assembled as a value (snapshots, tests).
    pub fn entity(&self, index: usize) -> Entity {
        let (x, y) = self.position_of(index);
        let (dx, dy) = self.velocity_of(index);
        Entity::new(x, y, dx, dy)
    }

    /// The published position buffer, `2 * count()` elements.
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Replace the whole population. The only way entities enter or leave.
    pub(crate) fn repopulate(&mut self, entities: &[Entity]) {
        self.positions.clear();
        self.velocities.clear();
        for entity in entities {
            self.positions.push(entity.x);
            self.positions.push(entity.y);
            self.velocities.push(entity.dx);
            self.velocities.push(entity.dy);
        }
        self.scratch.clear();
        self.scratch.resize(self.positions.len(), 0.0);
    }

    /// Split borrows for one integration step:
    /// (previous positions, velocities, next-position output).
    pub(crate) fn step_buffers(&mut self) -> (&[f64], &mut [f64], &mut [f64]) {
        (&self.positions, &mut self.velocities, &mut self.scratch)
    }

    /// Publish the step just written to `scratch`. A copy rather than a
    /// swap, so the exported buffer keeps one address for the whole epoch.
    pub(crate) fn publish(&mut self) {
        self.positions.copy_from_slice(&self.scratch);
    }
}
