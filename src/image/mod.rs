//! Image noise generators.
//!
//! White fields are independent per pixel. Perlin and Simplex are coherent:
//! a seeded permutation table is built once per generator and every point is
//! then a pure function of its coordinates. [`Fbm`] layers octaves of either.
//!
//! [`render`] produces a finished row-major field in `[0, 1]` for any
//! [`ImageFamily`].

mod fbm;
mod perlin;
mod permutation;
mod simplex;
mod white;

pub use fbm::{Fbm, LACUNARITY};
pub use perlin::Perlin;
pub use permutation::{PermutationTable, TABLE_SIZE};
pub use simplex::Simplex;
pub use white::white_field;

use crate::config::{FractalParams, ImageFamily, Normalization};
use crate::scalar::normalize_min_max_in_place;
use rand::Rng;

/// A coherent 2-D noise function.
///
/// Implementations are deterministic: the same point always maps to the
/// same value for a given instance.
pub trait NoiseFn {
    /// Noise value at `point`, in `[-1, 1]`.
    fn get(&self, point: [f64; 2]) -> f64;

    /// Magnitude the function's extremes reach over a region of a few
    /// hundred lattice cells. [`Fbm`] divides by it so layered output peaks
    /// near 1.
    fn typical_peak(&self) -> f64 {
        1.0
    }
}

impl<N: NoiseFn + ?Sized> NoiseFn for &N {
    fn get(&self, point: [f64; 2]) -> f64 {
        (**self).get(point)
    }

    fn typical_peak(&self) -> f64 {
        (**self).typical_peak()
    }
}

/// Samples `noise` at every pixel and maps the result into `[0, 1]`.
///
/// Pixel `(col, row)` is evaluated at `[col, row]`; any frequency scaling is
/// the noise function's business (see [`Fbm`]).
pub fn coherent_field<N: NoiseFn>(
    noise: &N,
    width: usize,
    height: usize,
    normalization: Normalization,
) -> Vec<f64> {
    let mut pixels = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            pixels.push(noise.get([col as f64, row as f64]));
        }
    }
    match normalization {
        Normalization::Remap => {
            for pixel in pixels.iter_mut() {
                *pixel = (*pixel + 1.0) * 0.5;
            }
        }
        Normalization::MinMax => normalize_min_max_in_place(&mut pixels),
    }
    pixels
}

/// Generates a full field of the given family.
///
/// `params` and `normalization` only affect the coherent families; white
/// pixels are already uniform in `[0, 1)`.
pub fn render<R: Rng + ?Sized>(
    family: ImageFamily,
    rng: &mut R,
    width: usize,
    height: usize,
    params: FractalParams,
    normalization: Normalization,
) -> Vec<f64> {
    match family {
        ImageFamily::White => white_field(rng, width, height),
        ImageFamily::Perlin => {
            let fbm = Fbm::new(Perlin::new(rng), params);
            coherent_field(&fbm, width, height, normalization)
        }
        ImageFamily::Simplex => {
            let fbm = Fbm::new(Simplex::new(rng), params);
            coherent_field(&fbm, width, height, normalization)
        }
    }
}
