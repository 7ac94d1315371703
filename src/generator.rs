//! Validated entry points that turn configurations into buffers.
//!
//! Two styles are offered:
//!
//! - [`generate_audio`] / [`generate_image`] are stateless: each call builds
//!   a fresh [`RngHandle`] from the configuration's seed, so identical seeded
//!   configurations always give identical buffers.
//! - [`AudioNoiseGenerator`] / [`ImageNoiseGenerator`] own one handle across
//!   calls. Successive calls continue the same random stream until
//!   `reseed` replaces it.
//!
//! Every request is validated before the RNG is touched, so a rejected call
//! leaves the handle exactly where it was.

use crate::buffer::{AudioBuffer, ImageBuffer};
use crate::config::{
    AudioFamily, AudioNoiseConfig, FractalParams, ImageFamily, ImageNoiseConfig, Normalization,
    pixel_count, sample_count, validate_amplitude, validate_sample_rate,
};
use crate::error::Result;
use crate::rng::RngHandle;
use crate::{audio, image};

/// Generates one audio buffer from a self-contained configuration.
///
/// # Examples
///
/// ```
/// use noise_studio::{AudioFamily, AudioNoiseConfig, generate_audio};
///
/// let config = AudioNoiseConfig::new(AudioFamily::White, 48000, 0.5).with_seed(1);
/// let buffer = generate_audio(&config).unwrap();
/// assert_eq!(buffer.len(), 24000);
/// assert!(buffer.samples().iter().all(|s| (-1.0..=1.0).contains(s)));
/// ```
pub fn generate_audio(config: &AudioNoiseConfig) -> Result<AudioBuffer> {
    let mut rng = RngHandle::new(config.seed);
    render_audio(
        &mut rng,
        config.family,
        config.sample_rate,
        config.duration_seconds,
        config.amplitude,
    )
}

/// Generates one image buffer from a self-contained configuration.
///
/// # Examples
///
/// ```
/// use noise_studio::{ImageFamily, ImageNoiseConfig, generate_image};
///
/// let config = ImageNoiseConfig::new(ImageFamily::White, 64, 32).with_seed(42);
/// let image = generate_image(&config).unwrap();
/// assert_eq!(image.shape(), (32, 64));
/// ```
pub fn generate_image(config: &ImageNoiseConfig) -> Result<ImageBuffer> {
    let mut rng = RngHandle::new(config.seed);
    render_image(
        &mut rng,
        config.family,
        config.width,
        config.height,
        config.fractal(),
        config.normalization,
    )
}

fn render_audio(
    rng: &mut RngHandle,
    family: AudioFamily,
    sample_rate: u32,
    duration_seconds: f64,
    amplitude: f64,
) -> Result<AudioBuffer> {
    let count = validate_sample_rate(sample_rate)
        .and_then(|_| validate_amplitude(amplitude))
        .and_then(|_| sample_count(sample_rate, duration_seconds))
        .inspect_err(|e| log::warn!("rejected {} audio request: {}", family, e))?;

    log::debug!(
        "generating {} noise: {} samples at {} Hz (seed {})",
        family,
        count,
        sample_rate,
        rng.seed()
    );
    let seed = rng.seed();
    let samples = audio::render(family, &mut *rng, count, amplitude);
    Ok(AudioBuffer::new(samples, sample_rate, seed))
}

fn render_image(
    rng: &mut RngHandle,
    family: ImageFamily,
    width: usize,
    height: usize,
    params: FractalParams,
    normalization: Normalization,
) -> Result<ImageBuffer> {
    pixel_count(width, height)
        .and_then(|_| params.validate())
        .inspect_err(|e| log::warn!("rejected {} image request: {}", family, e))?;

    log::debug!(
        "generating {} noise: {}x{} {:?} (seed {})",
        family,
        width,
        height,
        params,
        rng.seed()
    );
    let seed = rng.seed();
    let pixels = image::render(family, rng, width, height, params, normalization);
    Ok(ImageBuffer::new(pixels, width, height, seed))
}

/// Audio generator that keeps its RNG between calls.
///
/// # Examples
///
/// ```
/// use noise_studio::{AudioFamily, AudioNoiseGenerator};
///
/// let mut generator = AudioNoiseGenerator::new(44100, Some(5));
/// let first = generator.generate(AudioFamily::Pink, 0.1, 1.0).unwrap();
///
/// generator.reseed(Some(5));
/// let again = generator.generate(AudioFamily::Pink, 0.1, 1.0).unwrap();
/// assert_eq!(first, again);
/// ```
#[derive(Debug, Clone)]
pub struct AudioNoiseGenerator {
    sample_rate: u32,
    rng: RngHandle,
}

impl AudioNoiseGenerator {
    /// Creates a generator for `sample_rate`, seeded from `seed` or entropy.
    ///
    /// The sample rate is checked on each call, not here.
    pub fn new(sample_rate: u32, seed: Option<u64>) -> Self {
        Self {
            sample_rate,
            rng: RngHandle::new(seed),
        }
    }

    /// Samples per second used for every buffer.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Seed of the current random stream.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Restarts the random stream from `seed` (or fresh entropy).
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.rng.reseed(seed);
    }

    /// Generates `duration_seconds` of the given family, peaking at `amplitude`.
    pub fn generate(
        &mut self,
        family: AudioFamily,
        duration_seconds: f64,
        amplitude: f64,
    ) -> Result<AudioBuffer> {
        render_audio(
            &mut self.rng,
            family,
            self.sample_rate,
            duration_seconds,
            amplitude,
        )
    }
}

/// Image generator that keeps its canvas size and RNG between calls.
///
/// Resizing only affects later calls; buffers already returned are
/// independent values and never change.
#[derive(Debug, Clone)]
pub struct ImageNoiseGenerator {
    width: usize,
    height: usize,
    rng: RngHandle,
}

impl ImageNoiseGenerator {
    /// Creates a generator for a `width` x `height` canvas.
    pub fn new(width: usize, height: usize, seed: Option<u64>) -> Self {
        Self {
            width,
            height,
            rng: RngHandle::new(seed),
        }
    }

    /// Current canvas width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Current canvas height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Changes the canvas size used by subsequent calls.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Seed of the current random stream.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Restarts the random stream from `seed` (or fresh entropy).
    pub fn reseed(&mut self, seed: Option<u64>) {
        self.rng.reseed(seed);
    }

    /// Independent uniform pixels.
    pub fn generate_white(&mut self) -> Result<ImageBuffer> {
        self.generate(
            ImageFamily::White,
            FractalParams::default(),
            Normalization::Remap,
        )
    }

    /// Fractal Perlin noise, remapped per pixel.
    pub fn generate_perlin(&mut self, params: FractalParams) -> Result<ImageBuffer> {
        self.generate(ImageFamily::Perlin, params, Normalization::Remap)
    }

    /// Fractal simplex noise, remapped per pixel.
    pub fn generate_simplex(&mut self, params: FractalParams) -> Result<ImageBuffer> {
        self.generate(ImageFamily::Simplex, params, Normalization::Remap)
    }

    /// Generates a field of any family at the current canvas size.
    pub fn generate(
        &mut self,
        family: ImageFamily,
        params: FractalParams,
        normalization: Normalization,
    ) -> Result<ImageBuffer> {
        render_image(
            &mut self.rng,
            family,
            self.width,
            self.height,
            params,
            normalization,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoiseError;

    #[test]
    fn test_failed_call_does_not_advance_rng() {
        let mut generator = AudioNoiseGenerator::new(8000, Some(3));
        let err = generator.generate(AudioFamily::White, -1.0, 1.0);
        assert!(matches!(err, Err(NoiseError::InvalidDuration { .. })));

        let after_error = generator.generate(AudioFamily::White, 0.01, 1.0).unwrap();
        let fresh = AudioNoiseGenerator::new(8000, Some(3))
            .generate(AudioFamily::White, 0.01, 1.0)
            .unwrap();
        assert_eq!(after_error, fresh);
    }

    #[test]
    fn test_successive_calls_continue_stream() {
        let mut generator = AudioNoiseGenerator::new(8000, Some(4));
        let a = generator.generate(AudioFamily::White, 0.01, 1.0).unwrap();
        let b = generator.generate(AudioFamily::White, 0.01, 1.0).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.seed(), b.seed());
    }

    #[test]
    fn test_zero_sample_rate_rejected() {
        let mut generator = AudioNoiseGenerator::new(0, Some(1));
        assert!(matches!(
            generator.generate(AudioFamily::Brown, 1.0, 1.0),
            Err(NoiseError::InvalidParameter {
                name: "sample_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_resize_leaves_old_buffers_alone() {
        let mut generator = ImageNoiseGenerator::new(16, 8, Some(2));
        let before = generator.generate_white().unwrap();
        let snapshot = before.clone();

        generator.resize(4, 4);
        let after = generator.generate_white().unwrap();

        assert_eq!(before, snapshot);
        assert_eq!(before.shape(), (8, 16));
        assert_eq!(after.shape(), (4, 4));
        assert_eq!((generator.width(), generator.height()), (4, 4));
    }

    #[test]
    fn test_image_reseed_reproduces() {
        let params = FractalParams::new(0.1, 3, 0.5);
        let mut generator = ImageNoiseGenerator::new(32, 32, Some(9));
        let first = generator.generate_simplex(params).unwrap();
        generator.reseed(Some(9));
        let second = generator.generate_simplex(params).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_image_invalid_requests() {
        let mut generator = ImageNoiseGenerator::new(0, 10, Some(1));
        assert!(matches!(
            generator.generate_white(),
            Err(NoiseError::InvalidDimensions {
                width: 0,
                height: 10
            })
        ));

        generator.resize(10, 10);
        assert!(matches!(
            generator.generate_perlin(FractalParams::new(-1.0, 1, 0.5)),
            Err(NoiseError::InvalidParameter { name: "scale", .. })
        ));
    }

    #[test]
    fn test_free_functions_match_stateful_first_call() {
        let config = ImageNoiseConfig::new(ImageFamily::Perlin, 20, 10)
            .with_scale(0.2)
            .with_octaves(2)
            .with_seed(17);
        let stateless = generate_image(&config).unwrap();
        let stateful = ImageNoiseGenerator::new(20, 10, Some(17))
            .generate(ImageFamily::Perlin, config.fractal(), Normalization::Remap)
            .unwrap();
        assert_eq!(stateless, stateful);
    }
}
