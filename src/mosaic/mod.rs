//! Mosaic generation engine
//!
//! Builds on the grid layer to rewrite a target image cell by cell, either
//! permuting its own tiles or sampling from a pool harvested across images.

/// Randomized tile placement over grid partitions
pub mod engine;

pub use engine::{generate, generate_with_seed};
