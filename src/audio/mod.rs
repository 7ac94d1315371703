//! Audio noise generators.
//!
//! Each colour of noise is a [`Signal`] that can be pulled one sample at a
//! time. [`render`] turns a family selector into a finished, normalized
//! sample buffer.

mod brown;
mod pink;
mod white;

pub use brown::{BROWN_LEAK, BROWN_STEP, BrownNoise};
pub use pink::{PINK_ROWS, PinkNoise};
pub use white::WhiteNoise;

use crate::config::AudioFamily;
use crate::scalar::normalize_peak_in_place;
use crate::Signal;
use rand::Rng;

/// Generates `count` samples of the given family, bounded by `amplitude`.
///
/// White noise is scaled per draw. Pink and brown noise are first
/// peak-normalized to 1.0 and only then scaled, so `amplitude` always sets
/// the final peak level.
pub fn render<R: Rng>(family: AudioFamily, rng: R, count: usize, amplitude: f64) -> Vec<f64> {
    match family {
        AudioFamily::White => WhiteNoise::with_rng(rng)
            .with_amplitude(amplitude)
            .collect_samples(count),
        AudioFamily::Pink => {
            let mut samples = PinkNoise::with_rng(rng).collect_samples(count);
            normalize_peak_in_place(&mut samples, amplitude);
            samples
        }
        AudioFamily::Brown => {
            let mut samples = BrownNoise::with_rng(rng).collect_samples(count);
            normalize_peak_in_place(&mut samples, amplitude);
            samples
        }
    }
}
