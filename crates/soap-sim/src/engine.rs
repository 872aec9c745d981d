//! Simulation engine: lifecycle and the per-tick pipeline.
//!
//! `SimulationEngine` owns the entity store, the soap points, and the force
//! accumulator, advances them one tick at a time, and publishes the flat
//! position buffer for the renderer. Completely headless: no browser or
//! wasm dependency anywhere below this point.

use soap_core::config::SimConfig;
use soap_core::types::{Entity, SoapPoint};

use crate::spawn;
use crate::store::EntityStore;
use crate::systems;

/// The simulation engine. One owned instance per canvas, driven by the
/// host's frame loop; there is no global state and no internal clock.
pub struct SimulationEngine {
    store: EntityStore,
    soap: Vec<SoapPoint>,
    config: SimConfig,
    /// Force accumulator for the tick in progress, interleaved like the
    /// position buffer. Sized once per epoch.
    forces: Vec<f64>,
    /// Bumped by every `reset`; names the position buffer's validity
    /// generation for hosts that cache a view of it.
    epoch: u64,
    /// Ticks advanced since the last `reset`.
    ticks_in_epoch: u64,
}

impl SimulationEngine {
    /// Create an engine with the given parameters. The store starts empty;
    /// no entities exist until the first `reset`.
    pub fn new(config: SimConfig) -> Self {
        Self {
            store: EntityStore::new(),
            soap: Vec::new(),
            config,
            forces: Vec::new(),
            epoch: 0,
            ticks_in_epoch: 0,
        }
    }

    /// Start a new epoch: re-tile the lattice from the current parameters,
    /// drop all soap points, and invalidate any view of the previous
    /// position buffer.
    pub fn reset(&mut self) {
        let entities = spawn::lattice(&self.config);
        self.store.repopulate(&entities);
        self.soap.clear();
        self.forces = vec![0.0; self.store.positions().len()];
        self.epoch += 1;
        self.ticks_in_epoch = 0;
    }

    /// Update the canvas bound used by wall clamping and the soap radius.
    ///
    /// Deliberately does NOT re-tile: callers that want entities laid out
    /// for the new size follow up with `reset`, in that order.
    pub fn update_canvas_size(&mut self, canvas_size: f64) {
        self.config.canvas_size = canvas_size;
    }

    /// Append one soap point at `(x, y)`. Points accumulate without limit
    /// until the next `reset`.
    pub fn add_soap(&mut self, x: f64, y: f64) {
        self.soap.push(SoapPoint::new(x, y));
    }

    /// Advance the simulation by exactly one step.
    ///
    /// Every force reads the positions published by the previous step, so
    /// the result is independent of entity iteration order.
    pub fn tick(&mut self) {
        // 1. Zero the force accumulator.
        self.forces.fill(0.0);
        // 2. Entity-entity repulsion (exhaustive pairwise scan).
        systems::repulsion::entities(self.store.positions(), &self.config, &mut self.forces);
        // 3. Soap repulsion (larger, canvas-scaled radius).
        systems::repulsion::soap(self.store.positions(), &self.soap, &self.config, &mut self.forces);
        // 4. Integrate into the scratch buffer, clamping to the walls.
        let (positions, velocities, next) = self.store.step_buffers();
        systems::integrate::advance(positions, &self.forces, velocities, next, &self.config);
        // 5. Publish the step.
        self.store.publish();
        self.ticks_in_epoch += 1;
    }

    /// Current entity count (changes only via `reset`).
    pub fn entity_count(&self) -> usize {
        self.store.count()
    }

    /// The published position buffer: `2 * entity_count()` values laid out
    /// `[x0, y0, x1, y1, ..]`, reflecting the most recent `tick` (or
    /// `reset` if none has run this epoch).
    pub fn positions(&self) -> &[f64] {
        self.store.positions()
    }

    /// Validity generation of the position buffer; every `reset` bumps it.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Ticks advanced since the last `reset`.
    pub fn ticks_in_epoch(&self) -> u64 {
        self.ticks_in_epoch
    }

    /// Current parameters.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Entity `index` assembled as a value (tests, diagnostics). Panics
    /// past `entity_count()`.
    pub fn entity(&self, index: usize) -> Entity {
        self.store.entity(index)
    }

    /// The soap points placed this epoch, in placement order.
    pub fn soap_points(&self) -> &[SoapPoint] {
        &self.soap
    }

    /// Replace the population with a hand-built arrangement (for tests that
    /// need geometry the lattice cannot produce). Starts a new epoch but
    /// keeps soap points.
    #[cfg(test)]
    pub fn place_entities(&mut self, entities: &[Entity]) {
        self.store.repopulate(entities);
        self.forces = vec![0.0; self.store.positions().len()];
        self.epoch += 1;
        self.ticks_in_epoch = 0;
    }
}
