//! White noise generator implementation.

use crate::{RngHandle, Signal};
use rand::Rng;

/// A white noise generator.
///
/// White noise has equal power across all frequencies. Each sample is
/// a random value uniformly distributed in `[-amplitude, amplitude)`.
pub struct WhiteNoise<R: Rng = RngHandle> {
    /// Random number generator
    rng: R,
    /// Peak output level
    amplitude: f64,
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a new white noise generator with unit amplitude.
    ///
    /// # Arguments
    ///
    /// * `rng` - Random number generator to draw from (owned or `&mut`)
    ///
    /// # Examples
    ///
    /// ```
    /// use noise_studio::{RngHandle, Signal, audio::WhiteNoise};
    ///
    /// let mut noise = WhiteNoise::with_rng(RngHandle::new(Some(42)));
    /// let sample = noise.next_sample();
    /// assert!((-1.0..1.0).contains(&sample));
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            amplitude: 1.0,
        }
    }

    /// Sets the peak output level.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Returns the peak output level.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }
}

impl<R: Rng> Signal for WhiteNoise<R> {
    fn next_sample(&mut self) -> f64 {
        self.rng.gen_range(-1.0..1.0) * self.amplitude
    }
}
