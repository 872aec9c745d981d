//! Core types and definitions for the soap simulation.
//!
//! This crate defines the vocabulary shared across the engine and the
//! browser boundary: the particle and soap-point types, the engine
//! configuration, and the default constants. It has no dependency on
//! wasm-bindgen or any runtime framework.

pub mod config;
pub mod constants;
pub mod types;
