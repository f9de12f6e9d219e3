//! Mosaic image generation by randomized tile shuffling
//!
//! The system partitions a source image into an n-by-n grid of cells and
//! rebuilds it with tiles either permuted among themselves or drawn at
//! random from a pool of tiles harvested across several images, over one
//! or more shuffle passes.

// deny rather than forbid: ndarray's s![] expands with a scoped allow
#![deny(unsafe_code)]

/// Image partitioning into grid cells and reassembly
pub mod grid;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for mosaic assembly
pub mod math;
/// Mosaic generation engine
pub mod mosaic;

pub use io::error::{MosaicError, Result};
