//! Image decoding and encoding between disk files and pixel buffers

use std::path::Path;

use crate::grid::Image;
use crate::io::error::{MosaicError, Result};

/// Decode an image file into an RGB pixel buffer
///
/// Accepts any raster format the `image` crate can identify (PNG, JPEG,
/// BMP, GIF among others); the decoded pixels are converted to 8-bit RGB.
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] if the file cannot be read or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<Image> {
    let path_buf = path.as_ref().to_path_buf();
    let rgb = image::open(&path_buf)
        .map_err(|e| MosaicError::ImageLoad {
            path: path_buf,
            source: e,
        })?
        .to_rgb8();

    let (width, height) = rgb.dimensions();
    let mut data = Image::zeros((height as usize, width as usize, 3));
    for (x, y, pixel) in rgb.enumerate_pixels() {
        for (c, &value) in pixel.0.iter().enumerate() {
            if let Some(target) = data.get_mut((y as usize, x as usize, c)) {
                *target = value;
            }
        }
    }

    Ok(data)
}

/// Encode an RGB pixel buffer to disk, format chosen by file extension
///
/// Parent directories are created as needed. Channel order conversion for
/// the chosen container is handled by the `image` crate.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the path
pub fn save_image<P: AsRef<Path>>(path: P, data: &Image) -> Result<()> {
    let path = path.as_ref();
    let (height, width, _) = data.dim();

    let mut buffer = image::RgbImage::new(width as u32, height as u32);
    for (x, y, pixel) in buffer.enumerate_pixels_mut() {
        for (c, value) in pixel.0.iter_mut().enumerate() {
            *value = data.get((y as usize, x as usize, c)).copied().unwrap_or(0);
        }
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    buffer.save(path).map_err(|e| MosaicError::ImageSave {
        path: path.to_path_buf(),
        source: e,
    })
}
