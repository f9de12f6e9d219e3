//! Input/output operations and error handling
//!
//! Covers everything between the pixel-transform core and the filesystem:
//! image decode/encode, the batch CLI shell, progress display, and the
//! shared error taxonomy.

/// Command-line interface and batch file processing
pub mod cli;
/// Runtime defaults and fixed settings
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Image decoding and encoding
pub mod image;
/// Progress display for batch runs
pub mod progress;
