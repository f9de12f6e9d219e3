//! Image partitioning into grid cells and reassembly
//!
//! This module contains the grid layer of mosaic generation:
//! - Boundary computation for an n-by-n split of an image
//! - Tile extraction as owned cell copies
//! - Cell-wise reassembly of a full image from supplied tiles

/// Grid boundary computation, tile extraction, and reassembly
pub mod partition;

pub use partition::{GridSpec, Image, Tile, assemble, extract_tiles};
