//! # WAVE Decoding Example
//!
//! Decodes a WAVE file and prints its header, channel layout and a coarse
//! volume envelope. Without a path, a short synthetic tone is decoded instead.
//!
//! Run with:
//! ```bash
//! cargo run --example decode_demo --package core-wav -- path/to/file.wav
//!
//! # Lenient decoding with debug logs
//! cargo run --example decode_demo --package core-wav -- path/to/file.wav --lenient
//! ```

use anyhow::Context;
use core_runtime::logging::{init_logging, LogLevel, LoggingConfig};
use core_wav::analysis::volume_envelope;
use core_wav::{DecoderConfig, WavDecoder};
use std::env;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let lenient = args.iter().any(|a| a == "--lenient");
    let path = args.iter().find(|a| !a.starts_with("--"));

    let level = if lenient { LogLevel::Debug } else { LogLevel::Info };
    init_logging(LoggingConfig::default().with_level(level))?;

    let config = if lenient {
        DecoderConfig::lenient()
    } else {
        DecoderConfig::default()
    };
    let decoder = WavDecoder::new(config)?;

    let wav = match path {
        Some(path) => decoder
            .read_file(path)
            .with_context(|| format!("failed to decode {}", path))?,
        None => {
            info!("No file given, decoding a synthetic 440 Hz tone");
            decoder.read(&synthetic_tone(440.0, 8000, 0.5))?
        }
    };

    println!("{}", wav.header);
    if let Some(duration) = wav.header.duration() {
        println!("Duration: {:.3}s", duration.as_secs_f64());
    }

    let window = (wav.header.sampling_rate / 10).max(1) as usize;
    for (index, channel) in wav.audio.channels().iter().enumerate() {
        let envelope = volume_envelope(channel, window);
        let bars: String = envelope
            .iter()
            .map(|level| match (level * 4.0) as u32 {
                0 => '.',
                1 => ':',
                2 => '|',
                _ => '#',
            })
            .collect();
        println!("ch{} {:>8} frames  {}", index, channel.len(), bars);
    }

    Ok(())
}

/// Build a mono 16-bit PCM WAVE buffer holding a sine tone.
fn synthetic_tone(frequency: f64, sampling_rate: u32, seconds: f64) -> Vec<u8> {
    let frames = (f64::from(sampling_rate) * seconds) as u32;
    let data_size = frames * 2;

    let mut out = Vec::with_capacity(44 + data_size as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_size).to_le_bytes());
    out.extend_from_slice(b"WAVEfmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&sampling_rate.to_le_bytes());
    out.extend_from_slice(&(sampling_rate * 2).to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());

    for i in 0..frames {
        let t = f64::from(i) / f64::from(sampling_rate);
        let envelope = 1.0 - t / seconds;
        let sample = (2.0 * std::f64::consts::PI * frequency * t).sin() * envelope * 0.8;
        out.extend_from_slice(&((sample * 32767.0) as i16).to_le_bytes());
    }

    out
}
