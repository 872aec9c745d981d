//! Headless simulation engine for the soap particle toy.
//!
//! Owns the entity store and the soap points, advances the repulsion and
//! integration systems one tick at a time, and publishes the flat position
//! buffer the renderer reads every frame. No browser dependency; the wasm
//! boundary lives in `soap-wasm`.

pub mod engine;
pub mod spawn;
pub mod store;
pub mod systems;

pub use engine::SimulationEngine;
pub use soap_core as core;
