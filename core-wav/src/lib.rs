//! # WAVE Decoding Module
//!
//! Decodes RIFF/WAVE containers holding linear PCM into normalized,
//! per-channel `f32` sample arrays.
//!
//! ## Overview
//!
//! Decoding happens in two stages:
//! - **Chunk scanning** validates the RIFF/WAVE/fmt preamble and finds the
//!   `data` chunk, skipping any chunks in between ([`scanner`])
//! - **Sample decoding** normalizes 8/16/32-bit samples and de-interleaves
//!   them into one sequence per channel ([`decoder`])
//!
//! Both stages are pure functions over a borrowed buffer.
//!
//! ```rust,no_run
//! # fn example(bytes: &[u8]) -> core_wav::Result<()> {
//! let wav = core_wav::read(bytes)?;
//! let left = wav.audio.channel(0).unwrap_or_default();
//! let level = core_wav::analysis::volume_level(left);
//! println!("{} -> peak-to-peak {}", wav.header, level);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod config;
pub mod decoder;
pub mod error;
pub mod header;
pub mod reader;
pub mod scanner;

pub use config::{ChannelPolicy, DataSizePolicy, DecoderConfig, EightBitMapping};
pub use decoder::{decode, read, read_file, DecodedAudio, WavDecoder, WavFile};
pub use error::{Result, WavError};
pub use header::{FourCc, WaveHeader};
pub use scanner::{scan, scan_with, ScanResult};
