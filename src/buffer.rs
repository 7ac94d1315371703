//! Finished, immutable generation results.
//!
//! Buffers are created whole by the facade and handed to the caller. Their
//! contents cannot be changed afterwards; consumers read them through slices
//! or take ownership with `into_samples` / `into_pixels`.

/// A mono buffer of audio samples.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    samples: Vec<f64>,
    sample_rate: u32,
    seed: u64,
}

impl AudioBuffer {
    pub(crate) fn new(samples: Vec<f64>, sample_rate: u32, seed: u64) -> Self {
        Self {
            samples,
            sample_rate,
            seed,
        }
    }

    /// All samples, in playback order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Takes ownership of the samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples. Buffers from the generators
    /// never do.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples per second.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Seed the generating RNG was built from. For buffers returned by
    /// [`generate_audio`](crate::generate_audio), putting it back into the
    /// configuration reproduces this buffer exactly.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Length of the buffer in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }

    /// Quantizes to signed 16-bit PCM, clamping anything outside `[-1, 1]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use noise_studio::{AudioFamily, AudioNoiseConfig, generate_audio};
    ///
    /// let config = AudioNoiseConfig::new(AudioFamily::Brown, 8000, 0.25).with_seed(3);
    /// let pcm = generate_audio(&config).unwrap().to_i16_pcm();
    /// assert_eq!(pcm.len(), 2000);
    /// ```
    pub fn to_i16_pcm(&self) -> Vec<i16> {
        self.samples
            .iter()
            .map(|s| (s.clamp(-1.0, 1.0) * f64::from(i16::MAX)).round() as i16)
            .collect()
    }
}

/// A row-major grid of pixel values in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pixels: Vec<f64>,
    width: usize,
    height: usize,
    seed: u64,
}

impl ImageBuffer {
    pub(crate) fn new(pixels: Vec<f64>, width: usize, height: usize, seed: u64) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            pixels,
            width,
            height,
            seed,
        }
    }

    /// Pixels per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`, matching row-major array conventions.
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Seed the generating RNG was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// All pixels, row by row.
    pub fn pixels(&self) -> &[f64] {
        &self.pixels
    }

    /// Takes ownership of the row-major pixels.
    pub fn into_pixels(self) -> Vec<f64> {
        self.pixels
    }

    /// Value at column `x`, row `y`, or `None` outside the image.
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// One row of pixels, or `None` past the last row.
    pub fn row(&self, y: usize) -> Option<&[f64]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.pixels[start..start + self.width])
    }

    /// Iterates over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.pixels.chunks_exact(self.width)
    }

    /// Quantizes to 8-bit greyscale, row-major.
    pub fn to_luma8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .map(|p| (p.clamp(0.0, 1.0) * f64::from(u8::MAX)).round() as u8)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_accessors() {
        let buffer = AudioBuffer::new(vec![0.0, 0.5, -0.5, 1.0], 4, 11);
        assert_eq!(buffer.len(), 4);
        assert!(!buffer.is_empty());
        assert_eq!(buffer.sample_rate(), 4);
        assert_eq!(buffer.seed(), 11);
        assert_eq!(buffer.duration_seconds(), 1.0);
        assert_eq!(buffer.clone().into_samples(), buffer.samples().to_vec());
    }

    #[test]
    fn test_i16_pcm() {
        let buffer = AudioBuffer::new(vec![0.0, 1.0, -1.0, 2.0, 0.5], 44100, 0);
        assert_eq!(buffer.to_i16_pcm(), vec![0, 32767, -32767, 32767, 16384]);
    }

    #[test]
    fn test_image_indexing() {
        let pixels: Vec<f64> = (0..6).map(|i| i as f64 / 10.0).collect();
        let image = ImageBuffer::new(pixels, 3, 2, 5);
        assert_eq!(image.shape(), (2, 3));
        assert_eq!(image.get(0, 0), Some(0.0));
        assert_eq!(image.get(2, 0), Some(0.2));
        assert_eq!(image.get(0, 1), Some(0.3));
        assert_eq!(image.get(3, 0), None);
        assert_eq!(image.get(0, 2), None);
        assert_eq!(image.row(1), Some(&[0.3, 0.4, 0.5][..]));
        assert_eq!(image.row(2), None);
        assert_eq!(image.rows().count(), 2);
    }

    #[test]
    fn test_luma8() {
        let image = ImageBuffer::new(vec![0.0, 1.0, 0.5, 1.5], 2, 2, 0);
        assert_eq!(image.to_luma8(), vec![0, 255, 128, 255]);
    }
}
