//! Per-tick systems, run by the engine in a fixed order.
//!
//! Systems are free functions over the store's flat buffers; they own no
//! state and touch only what their signatures name.

pub mod integrate;
pub mod repulsion;
