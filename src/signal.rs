//! Pull-based sample source trait.
//!
//! Audio noise generators implement [`Signal`]: they hand out one sample per
//! call and can fill whole buffers. The facade uses the batch form to
//! materialize complete [`AudioBuffer`](crate::AudioBuffer)s.

/// Common interface for every audio noise source.
///
/// The trait provides two fundamental operations:
/// - Single sample generation via `next_sample()`
/// - Batch generation via `process()` / `collect_samples()`
pub trait Signal {
    /// Generates the next sample.
    ///
    /// # Returns
    ///
    /// A sample value, typically between -1.0 and 1.0
    fn next_sample(&mut self) -> f64;

    /// Fills `buffer` with consecutive samples.
    ///
    /// Default implementation calls `next_sample()` for each element.
    /// Implementors may override this for more efficient batch processing.
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }

    /// Generates `count` samples into a freshly allocated buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use noise_studio::{RngHandle, Signal, audio::WhiteNoise};
    ///
    /// let mut noise = WhiteNoise::with_rng(RngHandle::new(Some(1)));
    /// let samples = noise.collect_samples(256);
    /// assert_eq!(samples.len(), 256);
    /// ```
    fn collect_samples(&mut self, count: usize) -> Vec<f64> {
        let mut buffer = vec![0.0; count];
        self.process(&mut buffer);
        buffer
    }
}

impl<S: Signal + ?Sized> Signal for &mut S {
    fn next_sample(&mut self) -> f64 {
        (**self).next_sample()
    }

    fn process(&mut self, buffer: &mut [f64]) {
        (**self).process(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ramp(f64);

    impl Signal for Ramp {
        fn next_sample(&mut self) -> f64 {
            self.0 += 1.0;
            self.0
        }
    }

    #[test]
    fn test_process_fills_in_order() {
        let mut ramp = Ramp(0.0);
        let mut buffer = [0.0; 4];
        ramp.process(&mut buffer);
        assert_eq!(buffer, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_collect_continues_stream() {
        let mut ramp = Ramp(0.0);
        assert_eq!(ramp.collect_samples(2), vec![1.0, 2.0]);
        assert_eq!((&mut ramp).collect_samples(2), vec![3.0, 4.0]);
        assert!(ramp.collect_samples(0).is_empty());
    }
}
