//! Generation requests and their validation.
//!
//! Configurations are plain values: build one with `Default` plus the
//! `with_*` methods, hand it to the facade, and keep it around to reproduce
//! the same buffer later. Nothing here touches the RNG, so a rejected
//! configuration never disturbs generator state.

use crate::error::{NoiseError, Result};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "presets")]
use serde::{Deserialize, Serialize};

/// Largest element count a `Vec<f64>` can address.
const MAX_ELEMENTS: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Audio noise colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "presets", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "presets", serde(try_from = "String", into = "String"))]
pub enum AudioFamily {
    /// Flat spectrum
    #[default]
    White,
    /// 1/f spectrum (Voss-McCartney)
    Pink,
    /// 1/f² spectrum (leaky integration)
    Brown,
}

/// Image noise families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "presets", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "presets", serde(try_from = "String", into = "String"))]
pub enum ImageFamily {
    /// Independent uniform pixels
    #[default]
    White,
    /// Improved Perlin gradient noise
    Perlin,
    /// 2-D simplex gradient noise
    Simplex,
}

/// How coherent noise in `[-1, 1]` is mapped onto pixel values in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "presets", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "presets", serde(rename_all = "snake_case"))]
pub enum Normalization {
    /// Per-pixel affine map `(v + 1) / 2`. A pixel's value depends only on
    /// its own coordinates, so crops of a larger field match exactly.
    #[default]
    Remap,
    /// Stretch the whole field so its minimum is 0 and maximum is 1.
    MinMax,
}

macro_rules! family_names {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// Lower-case selector name, as accepted by `FromStr`.
            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $name),+
                }
            }
        }

        impl FromStr for $ty {
            type Err = NoiseError;

            fn from_str(s: &str) -> Result<Self> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($name) {
                        return Ok($ty::$variant);
                    }
                )+
                Err(NoiseError::InvalidFamily(s.to_string()))
            }
        }

        impl TryFrom<String> for $ty {
            type Error = NoiseError;

            fn try_from(s: String) -> Result<Self> {
                s.parse()
            }
        }

        impl From<$ty> for String {
            fn from(family: $ty) -> String {
                family.name().to_string()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

family_names!(AudioFamily {
    White => "white",
    Pink => "pink",
    Brown => "brown",
});

family_names!(ImageFamily {
    White => "white",
    Perlin => "perlin",
    Simplex => "simplex",
});

/// Request for one audio buffer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "presets", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "presets", serde(default))]
pub struct AudioNoiseConfig {
    /// Samples per second
    pub sample_rate: u32,
    /// Length of the buffer in seconds
    pub duration_seconds: f64,
    /// Peak output level
    pub amplitude: f64,
    /// Noise colour
    pub family: AudioFamily,
    /// `None` draws a seed from entropy
    pub seed: Option<u64>,
}

impl Default for AudioNoiseConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            duration_seconds: 1.0,
            amplitude: 1.0,
            family: AudioFamily::White,
            seed: None,
        }
    }
}

impl AudioNoiseConfig {
    /// Creates a unit-amplitude configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use noise_studio::{AudioFamily, AudioNoiseConfig};
    ///
    /// let config = AudioNoiseConfig::new(AudioFamily::Pink, 48000, 0.5).with_seed(7);
    /// assert_eq!(config.sample_count().unwrap(), 24000);
    /// ```
    pub fn new(family: AudioFamily, sample_rate: u32, duration_seconds: f64) -> Self {
        Self {
            sample_rate,
            duration_seconds,
            family,
            ..Self::default()
        }
    }

    /// Sets the peak output level.
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Fixes the seed, making the output reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of samples this configuration produces, after validation.
    pub fn sample_count(&self) -> Result<usize> {
        self.validate()?;
        sample_count(self.sample_rate, self.duration_seconds)
    }

    /// Checks every field without generating anything.
    pub fn validate(&self) -> Result<()> {
        validate_sample_rate(self.sample_rate)?;
        validate_amplitude(self.amplitude)?;
        sample_count(self.sample_rate, self.duration_seconds).map(|_| ())
    }
}

/// Octave summation settings for coherent noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalParams {
    /// Base lattice frequency: lattice units per pixel for the first octave
    pub scale: f64,
    /// Number of summed layers, at least 1. Layers too fine or too faint to
    /// change the result are skipped rather than rejected.
    pub octaves: u32,
    /// Amplitude ratio between consecutive octaves
    pub persistence: f64,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            octaves: 1,
            persistence: 0.5,
        }
    }
}

impl FractalParams {
    /// Bundles the three fractal settings without checking them.
    ///
    /// # Arguments
    ///
    /// * `scale` - Lattice frequency of the first octave, per pixel
    /// * `octaves` - Number of layers to sum
    /// * `persistence` - Weight ratio between consecutive layers
    pub fn new(scale: f64, octaves: u32, persistence: f64) -> Self {
        Self {
            scale,
            octaves,
            persistence,
        }
    }

    /// Rejects a non-positive or non-finite `scale` or `persistence`, and
    /// zero `octaves`.
    pub fn validate(&self) -> Result<()> {
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(NoiseError::InvalidParameter {
                name: "scale",
                value: self.scale,
            });
        }
        if self.octaves == 0 {
            return Err(NoiseError::InvalidParameter {
                name: "octaves",
                value: f64::from(self.octaves),
            });
        }
        if !(self.persistence.is_finite() && self.persistence > 0.0) {
            return Err(NoiseError::InvalidParameter {
                name: "persistence",
                value: self.persistence,
            });
        }
        Ok(())
    }
}

/// Request for one image buffer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "presets", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "presets", serde(default))]
pub struct ImageNoiseConfig {
    pub width: usize,
    pub height: usize,
    pub family: ImageFamily,
    /// Base lattice frequency (coherent families only)
    pub scale: f64,
    /// Octave count (coherent families only)
    pub octaves: u32,
    /// Per-octave amplitude ratio (coherent families only)
    pub persistence: f64,
    pub normalization: Normalization,
    /// `None` draws a seed from entropy
    pub seed: Option<u64>,
}

impl Default for ImageNoiseConfig {
    fn default() -> Self {
        let fractal = FractalParams::default();
        Self {
            width: 512,
            height: 512,
            family: ImageFamily::White,
            scale: fractal.scale,
            octaves: fractal.octaves,
            persistence: fractal.persistence,
            normalization: Normalization::Remap,
            seed: None,
        }
    }
}

impl ImageNoiseConfig {
    /// Creates a configuration with default fractal settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use noise_studio::{ImageFamily, ImageNoiseConfig};
    ///
    /// let config = ImageNoiseConfig::new(ImageFamily::Perlin, 64, 64)
    ///     .with_scale(0.1)
    ///     .with_octaves(4)
    ///     .with_seed(7);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(family: ImageFamily, width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            family,
            ..Self::default()
        }
    }

    /// Sets the base lattice frequency.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets how many octaves are summed.
    pub fn with_octaves(mut self, octaves: u32) -> Self {
        self.octaves = octaves;
        self
    }

    /// Sets the weight ratio between consecutive octaves.
    pub fn with_persistence(mut self, persistence: f64) -> Self {
        self.persistence = persistence;
        self
    }

    /// Sets how coherent noise is mapped onto `[0, 1]`.
    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    /// Fixes the seed, making the output reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The fractal settings carried by this configuration.
    pub fn fractal(&self) -> FractalParams {
        FractalParams::new(self.scale, self.octaves, self.persistence)
    }

    /// Checks every field without generating anything.
    ///
    /// Fractal settings are checked for every family, so a configuration that
    /// validates stays valid when only its family is switched.
    pub fn validate(&self) -> Result<()> {
        pixel_count(self.width, self.height)?;
        self.fractal().validate()
    }
}

pub(crate) fn validate_sample_rate(sample_rate: u32) -> Result<()> {
    if sample_rate == 0 {
        return Err(NoiseError::InvalidParameter {
            name: "sample_rate",
            value: 0.0,
        });
    }
    Ok(())
}

pub(crate) fn validate_amplitude(amplitude: f64) -> Result<()> {
    if !(amplitude.is_finite() && amplitude >= 0.0) {
        return Err(NoiseError::InvalidParameter {
            name: "amplitude",
            value: amplitude,
        });
    }
    Ok(())
}

/// `floor(sample_rate * duration)`, rejecting anything that is not at least
/// one addressable sample.
pub(crate) fn sample_count(sample_rate: u32, duration_seconds: f64) -> Result<usize> {
    let invalid = || NoiseError::InvalidDuration {
        duration: duration_seconds,
    };
    if !(duration_seconds.is_finite() && duration_seconds > 0.0) {
        return Err(invalid());
    }
    let count = (f64::from(sample_rate) * duration_seconds).floor();
    if count < 1.0 || count > MAX_ELEMENTS as f64 {
        return Err(invalid());
    }
    Ok(count as usize)
}

/// `width * height`, rejecting zero sides and products past the addressable size.
pub(crate) fn pixel_count(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .filter(|&count| count > 0 && count <= MAX_ELEMENTS)
        .ok_or(NoiseError::InvalidDimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_parsing() {
        assert_eq!("white".parse::<AudioFamily>().unwrap(), AudioFamily::White);
        assert_eq!(" Pink ".parse::<AudioFamily>().unwrap(), AudioFamily::Pink);
        assert_eq!("BROWN".parse::<AudioFamily>().unwrap(), AudioFamily::Brown);
        assert_eq!("perlin".parse::<ImageFamily>().unwrap(), ImageFamily::Perlin);
        assert_eq!(
            "simplex".parse::<ImageFamily>().unwrap(),
            ImageFamily::Simplex
        );
    }

    #[test]
    fn test_unknown_family_is_an_error() {
        assert_eq!(
            "violet".parse::<AudioFamily>(),
            Err(NoiseError::InvalidFamily("violet".to_string()))
        );
        // Families are not shared between audio and image.
        assert!(matches!(
            "pink".parse::<ImageFamily>(),
            Err(NoiseError::InvalidFamily(_))
        ));
        assert!(matches!(
            "".parse::<AudioFamily>(),
            Err(NoiseError::InvalidFamily(_))
        ));
    }

    #[test]
    fn test_family_names_round_trip() {
        for family in AudioFamily::ALL {
            assert_eq!(family.to_string().parse::<AudioFamily>().unwrap(), *family);
        }
        for family in ImageFamily::ALL {
            assert_eq!(family.name().parse::<ImageFamily>().unwrap(), *family);
        }
    }

    #[test]
    fn test_sample_count_floor() {
        assert_eq!(sample_count(48000, 0.5), Ok(24000));
        assert_eq!(sample_count(44100, 0.1), Ok(4410));
        assert_eq!(sample_count(10, 0.19), Ok(1));
    }

    #[test]
    fn test_invalid_durations() {
        for duration in [0.0, -1.0, f64::NAN, f64::INFINITY, 1e-9] {
            assert!(matches!(
                sample_count(44100, duration),
                Err(NoiseError::InvalidDuration { .. })
            ));
        }
    }

    #[test]
    fn test_audio_config_validation() {
        assert!(AudioNoiseConfig::default().validate().is_ok());

        let zero_rate = AudioNoiseConfig::new(AudioFamily::White, 0, 1.0);
        assert!(matches!(
            zero_rate.validate(),
            Err(NoiseError::InvalidParameter {
                name: "sample_rate",
                ..
            })
        ));

        let bad_amp = AudioNoiseConfig::default().with_amplitude(-0.5);
        assert!(matches!(
            bad_amp.validate(),
            Err(NoiseError::InvalidParameter {
                name: "amplitude",
                ..
            })
        ));
    }

    #[test]
    fn test_pixel_count() {
        assert_eq!(pixel_count(64, 32), Ok(2048));
        assert!(pixel_count(0, 32).is_err());
        assert!(pixel_count(32, 0).is_err());
        assert_eq!(
            pixel_count(usize::MAX, 2),
            Err(NoiseError::InvalidDimensions {
                width: usize::MAX,
                height: 2
            })
        );
        assert!(pixel_count(usize::MAX / 8, 2).is_err());
    }

    #[test]
    fn test_fractal_validation() {
        assert!(FractalParams::default().validate().is_ok());
        assert!(FractalParams::new(0.1, 16, 1.5).validate().is_ok());
        assert!(FractalParams::new(0.1, 17, 0.5).validate().is_ok());
        assert!(FractalParams::new(0.1, u32::MAX, 0.5).validate().is_ok());

        let cases = [
            (FractalParams::new(0.0, 1, 0.5), "scale"),
            (FractalParams::new(f64::NAN, 1, 0.5), "scale"),
            (FractalParams::new(1.0, 0, 0.5), "octaves"),
            (FractalParams::new(1.0, 1, 0.0), "persistence"),
            (FractalParams::new(1.0, 1, -0.5), "persistence"),
        ];
        for (params, expected) in cases {
            match params.validate() {
                Err(NoiseError::InvalidParameter { name, .. }) => assert_eq!(name, expected),
                other => panic!("expected {} error, got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_image_config_validation() {
        let config = ImageNoiseConfig::new(ImageFamily::White, 64, 32);
        assert!(config.validate().is_ok());
        assert_eq!(config.fractal(), FractalParams::default());

        let zero = ImageNoiseConfig::new(ImageFamily::Perlin, 0, 32);
        assert!(matches!(
            zero.validate(),
            Err(NoiseError::InvalidDimensions { .. })
        ));

        let bad_octaves = ImageNoiseConfig::new(ImageFamily::Simplex, 8, 8).with_octaves(0);
        assert!(matches!(
            bad_octaves.validate(),
            Err(NoiseError::InvalidParameter { name: "octaves", .. })
        ));
    }
}
