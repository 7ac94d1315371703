//! Pink noise generator implementation.

use crate::{RngHandle, Signal};
use rand::Rng;

/// Number of staggered-rate rows summed by the Voss-McCartney algorithm.
pub const PINK_ROWS: usize = 16;

/// A pink noise generator.
///
/// Pink noise (also called 1/f noise) has equal power per octave, meaning
/// it has more energy at lower frequencies than white noise. This
/// implementation uses the Voss-McCartney algorithm: row `i` is redrawn
/// whenever bit `i` is the lowest set bit of a running counter, so row `i`
/// changes every `2^(i+1)` samples. A fresh white value is added on every
/// sample to extend the spectrum to the top octave.
///
/// Raw output is the mean of the rows and the white term, so it stays
/// within `[-1.0, 1.0]`. The
/// buffer-level [`render`](super::render) peak-normalizes it.
pub struct PinkNoise<R: Rng = RngHandle> {
    /// Random number generator
    rng: R,
    /// Current value of each row
    rows: [f64; PINK_ROWS],
    /// Sum of `rows`, kept incrementally
    running_sum: f64,
    /// Sample counter (its trailing zeros pick the row to update)
    counter: u32,
}

impl<R: Rng> PinkNoise<R> {
    /// Creates a new pink noise generator drawing from `rng`.
    ///
    /// All rows are seeded from the RNG up front so the first samples already
    /// carry low-frequency content.
    ///
    /// # Examples
    ///
    /// ```
    /// use noise_studio::{RngHandle, Signal, audio::PinkNoise};
    ///
    /// let mut noise = PinkNoise::with_rng(RngHandle::new(Some(42)));
    /// let sample = noise.next_sample();
    /// assert!((-1.0..=1.0).contains(&sample));
    /// ```
    pub fn with_rng(mut rng: R) -> Self {
        let rows = [0.0; PINK_ROWS].map(|_| rng.gen_range(-1.0..1.0));
        let running_sum = rows.iter().sum();

        Self {
            rng,
            rows,
            running_sum,
            counter: 0,
        }
    }
}

impl<R: Rng> Signal for PinkNoise<R> {
    fn next_sample(&mut self) -> f64 {
        self.counter = self.counter.wrapping_add(1);

        // Zero has 32 trailing zeros, so the wrap-around sample updates no row.
        let row = self.counter.trailing_zeros() as usize;
        if row < PINK_ROWS {
            let fresh = self.rng.gen_range(-1.0..1.0);
            self.running_sum += fresh - self.rows[row];
            self.rows[row] = fresh;
        }

        let white = self.rng.gen_range(-1.0..1.0);
        (self.running_sum + white) / (PINK_ROWS + 1) as f64
    }
}
