//! Mathematical utilities for mosaic assembly

/// Bilinear resampling of pixel buffers
pub mod interpolation;
