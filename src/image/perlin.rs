//! Improved Perlin gradient noise in two dimensions.

use super::NoiseFn;
use super::permutation::{PermutationTable, TABLE_SIZE};
use crate::scalar::clamp;
use rand::Rng;

/// Slightly under the largest |value| seen over a few hundred lattice cells.
const PERLIN_TYPICAL_PEAK: f64 = 0.82;

/// 2-D improved Perlin noise.
///
/// Each lattice corner gets one of eight gradients chosen by the seeded
/// permutation table; the corner contributions are blended with the quintic
/// fade curve `6t⁵ - 15t⁴ + 10t³`. Output lies in `[-1, 1]`, and is exactly 0
/// on lattice points, so the constructor also draws a fractional lattice offset
/// that keeps integer pixel coordinates off the lattice.
///
/// # Examples
///
/// ```
/// use noise_studio::RngHandle;
/// use noise_studio::image::{NoiseFn, Perlin};
///
/// let perlin = Perlin::new(&mut RngHandle::new(Some(7)));
/// let value = perlin.get([1.25, 3.5]);
/// assert!((-1.0..=1.0).contains(&value));
/// assert_eq!(value, perlin.get([1.25, 3.5]));
/// ```
#[derive(Debug, Clone)]
pub struct Perlin {
    perm: PermutationTable,
    offset: [f64; 2],
}

impl Perlin {
    /// Builds the permutation table and lattice offset from `rng`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let perm = PermutationTable::new(rng);
        let offset = [
            rng.gen_range(0.0..TABLE_SIZE as f64),
            rng.gen_range(0.0..TABLE_SIZE as f64),
        ];
        Self { perm, offset }
    }

    /// Noise at a raw lattice position, without the seeded offset.
    pub fn get_raw(&self, x: f64, y: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let (xi, yi) = (x0 as i64, y0 as i64);
        let (xf, yf) = (x - x0, y - y0);

        let u = fade(xf);
        let v = fade(yf);

        let (xn, yn) = (xi.wrapping_add(1), yi.wrapping_add(1));

        let aa = self.perm.hash2(xi, yi);
        let ab = self.perm.hash2(xi, yn);
        let ba = self.perm.hash2(xn, yi);
        let bb = self.perm.hash2(xn, yn);

        let bottom = lerp(grad(aa, xf, yf), grad(ba, xf - 1.0, yf), u);
        let top = lerp(grad(ab, xf, yf - 1.0), grad(bb, xf - 1.0, yf - 1.0), u);
        clamp(lerp(bottom, top, v), -1.0, 1.0)
    }
}

impl NoiseFn for Perlin {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.get_raw(point[0] + self.offset[0], point[1] + self.offset[1])
    }

    fn typical_peak(&self) -> f64 {
        PERLIN_TYPICAL_PEAK
    }
}

#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Dot product of the corner offset with one of eight gradients.
#[inline]
pub(super) fn grad(hash: usize, x: f64, y: f64) -> f64 {
    match hash & 7 {
        0 => x + y,
        1 => -x + y,
        2 => x - y,
        3 => -x - y,
        4 => x,
        5 => -x,
        6 => y,
        _ => -y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RngHandle;

    fn perlin(seed: u64) -> Perlin {
        Perlin::new(&mut RngHandle::new(Some(seed)))
    }

    #[test]
    fn test_zero_on_lattice_points() {
        let noise = perlin(1);
        for x in -3..3 {
            for y in -3..3 {
                assert_eq!(noise.get_raw(x as f64, y as f64), 0.0);
            }
        }
    }

    #[test]
    fn test_range() {
        let noise = perlin(2);
        for i in 0..200 {
            for j in 0..200 {
                let value = noise.get([i as f64 * 0.037, j as f64 * 0.041]);
                assert!((-1.0..=1.0).contains(&value));
            }
        }
    }

    #[test]
    fn test_reproducible_point() {
        let a = perlin(3);
        let b = perlin(3);
        let p = [12.34, -5.67];
        assert_eq!(a.get(p).to_bits(), b.get(p).to_bits());
    }

    #[test]
    fn test_seed_changes_field() {
        let a = perlin(3);
        let b = perlin(4);
        let differs = (0..50).any(|i| {
            let p = [i as f64 * 0.31, i as f64 * 0.17];
            a.get(p) != b.get(p)
        });
        assert!(differs);
    }

    #[test]
    fn test_continuity() {
        let noise = perlin(5);
        let step = 1e-4;
        for i in 0..500 {
            let x = i as f64 * 0.013;
            let here = noise.get([x, 0.5]);
            let next = noise.get([x + step, 0.5]);
            assert!((here - next).abs() < 0.01, "jump at x={}", x);
        }
    }

    #[test]
    fn test_nonfinite_input_does_not_panic() {
        let noise = perlin(6);
        let _ = noise.get_raw(f64::NAN, 0.0);
        let _ = noise.get_raw(f64::INFINITY, f64::NEG_INFINITY);
    }
}
