//! Brown (Brownian / red) noise generator implementation.

use crate::{RngHandle, Signal};
use rand::Rng;

/// Feedback applied to the previous output each step. Must stay below 1.
pub const BROWN_LEAK: f64 = 0.998;

/// Scale of the white increment added each step.
pub const BROWN_STEP: f64 = 0.05;

/// A brown noise generator.
///
/// Brown noise has a 1/f² power spectrum. It is produced by leaky integration
/// of white noise: `y[n] = LEAK * y[n-1] + STEP * w[n]`. The leak keeps the
/// integrator bounded by `STEP / (1 - LEAK)`, so the output never drifts off
/// or turns non-finite however long it runs.
pub struct BrownNoise<R: Rng = RngHandle> {
    /// Random number generator
    rng: R,
    /// Previous output
    last: f64,
}

impl<R: Rng> BrownNoise<R> {
    /// Creates a new brown noise generator starting from silence.
    ///
    /// # Examples
    ///
    /// ```
    /// use noise_studio::{RngHandle, Signal, audio::BrownNoise};
    ///
    /// let mut noise = BrownNoise::with_rng(RngHandle::new(Some(42)));
    /// assert!(noise.next_sample().is_finite());
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self { rng, last: 0.0 }
    }

    /// Upper bound on the magnitude of any raw sample.
    pub fn bound() -> f64 {
        BROWN_STEP / (1.0 - BROWN_LEAK)
    }
}

impl<R: Rng> Signal for BrownNoise<R> {
    fn next_sample(&mut self) -> f64 {
        let white = self.rng.gen_range(-1.0..1.0);
        self.last = BROWN_LEAK * self.last + BROWN_STEP * white;
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::tests::{db_per_octave, octave_band_power_db};

    #[test]
    fn test_bounded_long_run() {
        let mut noise = BrownNoise::with_rng(RngHandle::new(Some(4)));
        let bound = BrownNoise::<RngHandle>::bound();
        for _ in 0..1_000_000 {
            let sample = noise.next_sample();
            assert!(sample.is_finite());
            assert!(sample.abs() <= bound);
        }
    }

    #[test]
    fn test_strongly_correlated() {
        let samples = BrownNoise::with_rng(RngHandle::new(Some(5))).collect_samples(50_000);
        let (mut num, mut den) = (0.0, 0.0);
        for pair in samples.windows(2) {
            num += pair[0] * pair[1];
            den += pair[0] * pair[0];
        }
        let lag1 = num / den;
        assert!(lag1 > 0.9, "lag-1 autocorrelation was {}", lag1);
    }

    #[test]
    fn test_spectrum_falls_six_db_per_octave() {
        // Per-bin power falls ~6 dB per octave, so octave bands, which double
        // in width each time, lose ~3 dB.
        let samples = BrownNoise::with_rng(RngHandle::new(Some(10))).collect_samples(1024 * 32);
        let bands = [4, 8, 16, 32, 64];
        let band_slope = db_per_octave(&octave_band_power_db(&samples, &bands));
        let per_bin_slope = band_slope - 10.0 * 2.0_f64.log10();
        assert!(
            (-7.5..=-4.5).contains(&per_bin_slope),
            "brown per-bin slope was {:.2} dB/octave",
            per_bin_slope
        );
    }
}
