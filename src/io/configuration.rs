//! Runtime defaults and fixed settings for the batch shell

/// Default grid order (the image splits into this many rows and columns)
pub const DEFAULT_GRID_ORDER: usize = 2;

/// Default number of shuffle passes per generated mosaic
pub const DEFAULT_ITERATIONS: usize = 1;

/// Default number of independently regenerated mosaics per input image
pub const DEFAULT_FRAMES: usize = 1;

/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";

/// File extensions accepted when scanning for input and pool images
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
