//! Fractal Brownian motion: octave summation over a coherent source.

use super::NoiseFn;
use crate::config::FractalParams;
use crate::scalar::clamp;

/// Frequency ratio between consecutive octaves.
pub const LACUNARITY: f64 = 2.0;

/// Lattice offset added per octave index, so octaves never sample the same
/// region of the source.
const OCTAVE_SHIFT: [f64; 2] = [37.13, 59.71];

/// Sums `octaves` layers of `source`.
///
/// Octave `i` samples at frequency `scale * 2^i`, shifted by `i` times a
/// fixed lattice offset, with weight `persistence^i`. The shift keeps the
/// layers uncorrelated, so the sum grows like the root-sum-square of the
/// weights. Dividing by that and by the source's
/// [`typical_peak`](NoiseFn::typical_peak) puts the field's peak near 1.
/// Rare coincident extremes are clamped to `[-1, 1]`.
///
/// Octaves whose weight has fallen below `f64::EPSILON`, or whose frequency
/// or weight would overflow, add nothing and are skipped.
#[derive(Debug, Clone)]
pub struct Fbm<N: NoiseFn> {
    source: N,
    params: FractalParams,
    /// Octaves actually summed
    layers: u32,
    norm: f64,
}

impl<N: NoiseFn> Fbm<N> {
    /// Wraps `source`. `params` are expected to be validated already.
    ///
    /// # Examples
    ///
    /// ```
    /// use noise_studio::{FractalParams, RngHandle};
    /// use noise_studio::image::{Fbm, NoiseFn, Simplex};
    ///
    /// let source = Simplex::new(&mut RngHandle::new(Some(1)));
    /// let fbm = Fbm::new(source, FractalParams::new(0.05, 4, 0.5));
    /// assert!((-1.0..=1.0).contains(&fbm.get([10.0, 20.0])));
    /// ```
    pub fn new(source: N, params: FractalParams) -> Self {
        let mut layers = 0;
        let mut weight = 1.0_f64;
        let mut frequency = params.scale;
        let mut sum_sq = 0.0_f64;
        while layers < params.octaves {
            let next_sum_sq = sum_sq + weight * weight;
            if weight < f64::EPSILON || !frequency.is_finite() || !next_sum_sq.is_finite() {
                break;
            }
            sum_sq = next_sum_sq;
            layers += 1;
            weight *= params.persistence;
            frequency *= LACUNARITY;
        }

        let spread = source.typical_peak() * sum_sq.sqrt();
        let norm = if spread > 0.0 && spread.is_finite() {
            1.0 / spread
        } else {
            1.0
        };
        Self {
            source,
            params,
            layers,
            norm,
        }
    }

    /// The settings this generator was built with.
    pub fn params(&self) -> &FractalParams {
        &self.params
    }

    /// Number of octaves that contribute to the output. Never more than
    /// `params().octaves`.
    pub fn layers(&self) -> u32 {
        self.layers
    }

    /// The wrapped noise function.
    pub fn source(&self) -> &N {
        &self.source
    }
}

impl<N: NoiseFn> NoiseFn for Fbm<N> {
    fn get(&self, point: [f64; 2]) -> f64 {
        let mut sum = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = self.params.scale;
        for octave in 0..self.layers {
            let shift = f64::from(octave);
            sum += amplitude
                * self.source.get([
                    point[0] * frequency + shift * OCTAVE_SHIFT[0],
                    point[1] * frequency + shift * OCTAVE_SHIFT[1],
                ]);
            amplitude *= self.params.persistence;
            frequency *= LACUNARITY;
        }
        clamp(sum * self.norm, -1.0, 1.0)
    }
}
