//! Browser boundary for the soap simulation.
//!
//! Exposes the engine to JS as a `State` class. The frontend drives the
//! frame loop: each frame it calls `tick`, then reads positions straight out
//! of wasm linear memory as a `Float64Array` over
//! (`get_positions_ptr`, `get_positions_len`), with no per-frame
//! serialization or copying. `export_epoch` names the buffer generation so a
//! view cached across a `reset` is detected instead of silently reading a
//! stale buffer.

use wasm_bindgen::prelude::*;

use soap_core::config::SimConfig;
use soap_sim::SimulationEngine;

// Logs to the browser console on wasm; formats and discards in native tests.
#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => {
        web_sys::console::log_1(&format!($($t)*).into());
    };
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_log {
    ($($t:tt)*) => {
        drop(format!($($t)*));
    };
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log!("soap-sim module loaded");
}

/// Handle the frontend holds for one simulation instance. One per canvas;
/// there is no module-level state behind it.
#[wasm_bindgen]
pub struct State {
    engine: SimulationEngine,
}

#[wasm_bindgen]
impl State {
    /// Build a simulation with the given parameters. The field is empty
    /// until `reset` is called.
    pub fn new(canvas_size: f64, circle_size: f64, repulsion_strength: f64) -> State {
        State {
            engine: SimulationEngine::new(SimConfig::new(
                canvas_size,
                circle_size,
                repulsion_strength,
            )),
        }
    }

    /// Re-tile the lattice for the current canvas size and drop all soap.
    /// Invalidates any cached position view (see `export_epoch`).
    pub fn reset(&mut self) {
        self.engine.reset();
        console_log!(
            "reset: {} circles, epoch {}",
            self.engine.entity_count(),
            self.engine.epoch()
        );
    }

    /// Advance one simulation step.
    pub fn tick(&mut self) {
        self.engine.tick();
    }

    /// Place a soap repulsion point at `(x, y)` in canvas coordinates.
    pub fn add_soap(&mut self, x: f64, y: f64) {
        self.engine.add_soap(x, y);
    }

    /// Update the wall/radius bound only; the frontend calls `reset`
    /// afterward when it wants the field re-tiled.
    pub fn update_canvas_size(&mut self, canvas_size: f64) {
        self.engine.update_canvas_size(canvas_size);
    }

    /// Current number of circles.
    pub fn get_amount_of_circles(&self) -> u32 {
        self.engine.entity_count() as u32
    }

    /// Base address of the flat position buffer in wasm linear memory:
    /// `[x0, y0, x1, y1, ..]` as f64. Stable between resets.
    pub fn get_positions_ptr(&self) -> *const f64 {
        self.engine.positions().as_ptr()
    }

    /// Length of the position buffer in f64 elements (two per circle).
    pub fn get_positions_len(&self) -> usize {
        self.engine.positions().len()
    }

    /// Generation counter for the position buffer, bumped by every `reset`.
    /// A host holding a `Float64Array` view re-fetches it when this changes.
    pub fn export_epoch(&self) -> u32 {
        self.engine.epoch() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_sequence_matches_frontend() {
        // Construct small, resize to the viewport, then reset: the
        // frontend's exact startup order.
        let mut state = State::new(4.0, 3.0, 0.0005);
        assert_eq!(state.get_amount_of_circles(), 0);
        assert_eq!(state.get_positions_len(), 0);

        state.update_canvas_size(400.0);
        state.reset();
        assert_eq!(state.get_amount_of_circles(), 34 * 34);
        assert_eq!(
            state.get_positions_len(),
            2 * state.get_amount_of_circles() as usize
        );
    }

    #[test]
    fn test_positions_ptr_stable_within_epoch() {
        let mut state = State::new(400.0, 3.0, 0.0005);
        state.reset();
        let address = state.get_positions_ptr();
        let epoch = state.export_epoch();

        state.add_soap(200.0, 200.0);
        for _ in 0..10 {
            state.tick();
        }
        assert_eq!(state.get_positions_ptr(), address, "tick must not move the buffer");
        assert_eq!(state.export_epoch(), epoch, "tick must not change the epoch");

        state.reset();
        assert_ne!(state.export_epoch(), epoch, "reset must bump the epoch");
    }

    #[test]
    fn test_ptr_and_len_describe_live_positions() {
        let mut state = State::new(24.0, 3.0, 0.0005);
        state.reset();

        // Native stand-in for the Float64Array view the JS host builds.
        let view = unsafe {
            std::slice::from_raw_parts(state.get_positions_ptr(), state.get_positions_len())
        };
        assert_eq!(view, &[3.0, 3.0, 3.0, 15.0, 15.0, 3.0, 15.0, 15.0][..]);
    }
}
