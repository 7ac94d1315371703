//! Renders a few seconds of noise to a WAV file and prints a Perlin preview.
//!
//! Usage:
//!   cargo run --example render_noise -- [family] [seconds] [output.wav]
//!
//! `family` is one of white, pink or brown (default pink). Set
//! `RUST_LOG=debug` to see what the generators are doing.

use anyhow::{Context, Result};
use noise_studio::{
    AudioFamily, AudioNoiseConfig, ImageFamily, ImageNoiseConfig, generate_audio, generate_image,
};

const SAMPLE_RATE: u32 = 44100;
const PREVIEW_WIDTH: usize = 64;
const PREVIEW_HEIGHT: usize = 24;
const SHADES: &[u8] = b" .:-=+*#%@";

fn write_wav(path: &str, samples: &[i16], sample_rate: u32) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("failed to create {}", path))?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}

fn print_preview(seed: u64) -> Result<()> {
    let config = ImageNoiseConfig::new(ImageFamily::Perlin, PREVIEW_WIDTH, PREVIEW_HEIGHT)
        .with_scale(0.08)
        .with_octaves(4)
        .with_seed(seed);
    let image = generate_image(&config)?;

    for row in image.rows() {
        let line: String = row
            .iter()
            .map(|&p| {
                let index = (p * (SHADES.len() - 1) as f64).round() as usize;
                SHADES[index.min(SHADES.len() - 1)] as char
            })
            .collect();
        println!("{}", line);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let family: AudioFamily = args.next().as_deref().unwrap_or("pink").parse()?;
    let seconds: f64 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("bad duration '{}'", s))?,
        None => 3.0,
    };
    let path = args.next().unwrap_or_else(|| format!("{}_noise.wav", family));

    let config = AudioNoiseConfig::new(family, SAMPLE_RATE, seconds).with_amplitude(0.8);
    let buffer = generate_audio(&config)?;
    write_wav(&path, &buffer.to_i16_pcm(), buffer.sample_rate())?;
    println!(
        "Wrote {:.2}s of {} noise to {} (seed {})",
        buffer.duration_seconds(),
        family,
        path,
        buffer.seed()
    );

    println!();
    println!("Perlin preview (seed {}):", buffer.seed());
    print_preview(buffer.seed())
}
