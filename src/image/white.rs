//! Uncorrelated white noise fields.

use rand::Rng;

/// Fills a `width * height` field with independent draws from `[0, 1)`.
///
/// Draws are taken row by row, left to right, top to bottom. That order
/// fixes which RNG value lands on which pixel, so it must not change.
pub fn white_field<R: Rng + ?Sized>(rng: &mut R, width: usize, height: usize) -> Vec<f64> {
    let mut pixels = Vec::with_capacity(width * height);
    for _row in 0..height {
        for _col in 0..width {
            pixels.push(rng.gen_range(0.0..1.0));
        }
    }
    pixels
}
