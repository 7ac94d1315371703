//! Two-dimensional simplex noise.

use super::NoiseFn;
use super::perlin::grad;
use super::permutation::{PermutationTable, TABLE_SIZE};
use crate::scalar::clamp;
use rand::Rng;

/// Skew factor from input space onto the triangular lattice: `(√3 - 1) / 2`.
const F2: f64 = 0.366_025_403_784_438_6;
/// Unskew factor back to input space: `(3 - √3) / 6`.
const G2: f64 = 0.211_324_865_405_187_1;
/// Brings the summed corner contributions into roughly `[-1, 1]`.
const OUTPUT_SCALE: f64 = 70.0;

/// Slightly under the largest |value| seen over a few hundred lattice cells.
const SIMPLEX_TYPICAL_PEAK: f64 = 0.9;

/// 2-D simplex noise.
///
/// The plane is split into triangles; each point blends only the three
/// corners of the triangle containing it, using a radial `(0.5 - r²)⁴`
/// falloff. Gradients come from the same seeded permutation table as
/// [`Perlin`](super::Perlin), and like it the generator carries a fractional
/// lattice offset drawn at construction.
#[derive(Debug, Clone)]
pub struct Simplex {
    perm: PermutationTable,
    offset: [f64; 2],
}

impl Simplex {
    /// Builds the permutation table and lattice offset from `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let perm = PermutationTable::new(rng);
        let offset = [
            rng.gen_range(0.0..TABLE_SIZE as f64),
            rng.gen_range(0.0..TABLE_SIZE as f64),
        ];
        Self { perm, offset }
    }

    /// Noise at a raw position, without the seeded offset.
    pub fn get_raw(&self, x: f64, y: f64) -> f64 {
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * G2;

        // Distances from the cell origin, in input space.
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        // Lower or upper triangle of the skewed cell.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let (ii, jj) = (i as i64, j as i64);
        let h0 = self.perm.hash2(ii, jj);
        let h1 = self.perm.hash2(ii.wrapping_add(i1), jj.wrapping_add(j1));
        let h2 = self.perm.hash2(ii.wrapping_add(1), jj.wrapping_add(1));

        let n = corner(h0, x0, y0) + corner(h1, x1, y1) + corner(h2, x2, y2);
        clamp(OUTPUT_SCALE * n, -1.0, 1.0)
    }
}

impl NoiseFn for Simplex {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.get_raw(point[0] + self.offset[0], point[1] + self.offset[1])
    }

    fn typical_peak(&self) -> f64 {
        SIMPLEX_TYPICAL_PEAK
    }
}

#[inline]
fn corner(hash: usize, x: f64, y: f64) -> f64 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        0.0
    } else {
        let t2 = t * t;
        t2 * t2 * grad(hash, x, y)
    }
}
