//! Entity spawn factory: the startup lattice.
//!
//! `reset` repopulates the store from this pass alone; nothing else creates
//! entities.

use soap_core::config::SimConfig;
use soap_core::constants::LATTICE_STRIDE;
use soap_core::types::Entity;

/// Tile the square canvas with resting particles on every other grid cell.
///
/// Cells are `circle_size * 2` wide. Index `i` starts at 0 and advances by
/// `LATTICE_STRIDE` while `i * cell < canvas_size`, nested identically over
/// `j`; each visited `(i, j)` yields one particle centered in its cell. The
/// skipped odd-indexed cells give the field its sparse checkerboard look;
/// the gap is intentional, not slack to fill in. Iteration order (outer
/// `i`, inner `j`) fixes entity order for the epoch.
pub fn lattice(config: &SimConfig) -> Vec<Entity> {
    // A non-positive cell could never step past the far edge.
    if config.circle_size <= 0.0 {
        return Vec::new();
    }

    let cell = config.cell_size();
    let mut entities = Vec::new();
    let mut i = 0;
    while (i as f64) * cell < config.canvas_size {
        let mut j = 0;
        while (j as f64) * cell < config.canvas_size {
            entities.push(Entity::at_rest(
                i as f64 * cell + config.circle_size,
                j as f64 * cell + config.circle_size,
            ));
            j += LATTICE_STRIDE;
        }
        i += LATTICE_STRIDE;
    }
    entities
}
