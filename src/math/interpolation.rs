//! Bilinear pixel resampling for tile-to-cell fitting
//!
//! Grid cells produced by integer boundary division can differ from a
//! source tile by a pixel per axis, and pool tiles may come from images of
//! any resolution. Bilinear interpolation absorbs both mismatches.

use ndarray::Array3;

/// Resample a pixel buffer to exactly `out_h` by `out_w` pixels
///
/// Samples the source at half-pixel centers and blends the four nearest
/// source pixels per channel. Edge samples clamp to the source bounds, so a
/// one-pixel source extent degenerates to nearest-neighbour along that axis.
/// A zero-sized source or destination yields a zero-filled buffer.
pub fn resize_bilinear(source: &Array3<u8>, out_h: usize, out_w: usize) -> Array3<u8> {
    let (in_h, in_w, channels) = source.dim();
    let mut out = Array3::zeros((out_h, out_w, channels));
    if in_h == 0 || in_w == 0 || out_h == 0 || out_w == 0 {
        return out;
    }

    let scale_y = in_h as f64 / out_h as f64;
    let scale_x = in_w as f64 / out_w as f64;

    for ((oy, ox, c), value) in out.indexed_iter_mut() {
        // Half-pixel centers keep the sample grid aligned with the source
        let sy = ((oy as f64 + 0.5) * scale_y - 0.5).max(0.0);
        let sx = ((ox as f64 + 0.5) * scale_x - 0.5).max(0.0);

        let y0 = (sy as usize).min(in_h - 1);
        let x0 = (sx as usize).min(in_w - 1);
        let y1 = (y0 + 1).min(in_h - 1);
        let x1 = (x0 + 1).min(in_w - 1);
        let fy = sy - y0 as f64;
        let fx = sx - x0 as f64;

        let sample =
            |y: usize, x: usize| source.get((y, x, c)).copied().map_or(0.0, f64::from);

        let top = sample(y0, x0).mul_add(1.0 - fx, sample(y0, x1) * fx);
        let bottom = sample(y1, x0).mul_add(1.0 - fx, sample(y1, x1) * fx);
        let blended = top.mul_add(1.0 - fy, bottom * fy);

        *value = blended.round().clamp(0.0, 255.0) as u8;
    }

    out
}
