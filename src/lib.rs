//! Noise Studio - seeded noise generation for audio and images
//!
//! Audio buffers come in white, pink and brown colours. Image fields come as
//! white pixels or as fractal Perlin / simplex noise. Every generator draws
//! from a seedable [`RngHandle`], so any buffer can be reproduced from the
//! seed recorded on it.
//!
//! ```
//! use noise_studio::{ImageFamily, ImageNoiseConfig, generate_image};
//!
//! let config = ImageNoiseConfig::new(ImageFamily::Perlin, 64, 64)
//!     .with_scale(0.1)
//!     .with_octaves(4)
//!     .with_seed(7);
//! let a = generate_image(&config).unwrap();
//! let b = generate_image(&config).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod audio;
pub mod buffer;
pub mod config;
pub mod error;
pub mod generator;
pub mod image;
#[cfg(feature = "presets")]
pub mod preset;
pub mod rng;
pub mod scalar;
pub mod signal;

// Re-export commonly used types at the crate root
pub use buffer::{AudioBuffer, ImageBuffer};
pub use config::{
    AudioFamily, AudioNoiseConfig, FractalParams, ImageFamily, ImageNoiseConfig, Normalization,
};
pub use error::{NoiseError, Result};
pub use generator::{AudioNoiseGenerator, ImageNoiseGenerator, generate_audio, generate_image};
#[cfg(feature = "presets")]
pub use preset::{PRESET_SCHEMA_VERSION, Preset, PresetError};
pub use rng::RngHandle;
pub use signal::Signal;
