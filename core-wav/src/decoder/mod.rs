//! # Sample Decoder & De-interleaver
//!
//! Converts the bytes of a scanned `data` chunk into one normalized `f32`
//! sequence per channel.
//!
//! ## Layout
//!
//! Samples are interleaved channel-major within each frame:
//!
//! ```text
//! data_offset
//! |  frame 0        |  frame 1        |
//! [c0][c1]...[cN-1] [c0][c1]...[cN-1] ...
//! ```
//!
//! Sample `c` of frame `i` lives at
//! `data_offset + i * frame_size + c * bytes_per_sample`. A trailing partial
//! frame is ignored.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use core_wav::{WavDecoder, DecoderConfig};
//!
//! # fn example(bytes: &[u8]) -> core_wav::Result<()> {
//! let decoder = WavDecoder::new(DecoderConfig::default())?;
//! let wav = decoder.read(bytes)?;
//! println!("{} Hz, {} frames", wav.header.sampling_rate, wav.audio.frames());
//! # Ok(())
//! # }
//! ```

mod audio;
mod sample_converter;

pub use audio::DecodedAudio;
pub use sample_converter::{clamp_samples, count_clipped, SampleConverter, SampleWidth};

use crate::config::{DataSizePolicy, DecoderConfig};
use crate::error::{Result, WavError};
use crate::header::WaveHeader;
use crate::scanner::{scan_with, ScanResult};
use core_runtime::logging::strip_path;
use std::path::Path;
use tracing::{debug, instrument, warn};

/// A fully decoded WAVE file.
#[derive(Debug, Clone, PartialEq)]
pub struct WavFile {
    pub header: WaveHeader,
    pub audio: DecodedAudio,
}

/// Decoder bound to a validated [`DecoderConfig`].
///
/// Holds no state beyond its configuration; one instance can decode any
/// number of buffers.
#[derive(Debug, Clone, Default)]
pub struct WavDecoder {
    config: DecoderConfig,
}

impl WavDecoder {
    /// Create a decoder, rejecting invalid configurations.
    pub fn new(config: DecoderConfig) -> Result<Self> {
        config.validate().map_err(WavError::InvalidConfig)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Locate and validate the header. See [`crate::scanner`].
    pub fn scan(&self, bytes: &[u8]) -> Result<ScanResult> {
        scan_with(bytes, &self.config)
    }

    /// Decode the sample data of an already scanned buffer.
    #[instrument(
        level = "debug",
        skip(self, bytes, header),
        fields(channels = header.channel_count, bits = header.bits_per_sample)
    )]
    pub fn decode(
        &self,
        bytes: &[u8],
        header: &WaveHeader,
        data_offset: usize,
    ) -> Result<DecodedAudio> {
        let width = SampleWidth::from_bits(header.bits_per_sample)?;
        if !self.config.channel_policy.accepts(header.channel_count) {
            return Err(WavError::UnsupportedChannelCount(header.channel_count));
        }

        let channel_count = usize::from(header.channel_count);
        let bytes_per_sample = width.bytes();
        let frame_size = bytes_per_sample * channel_count;
        let data_len = self.data_len(bytes, header, data_offset)?;
        let frame_count = data_len / frame_size;

        if data_len % frame_size != 0 {
            debug!(
                trailing = data_len % frame_size,
                "Ignoring trailing partial frame"
            );
        }

        let converter = SampleConverter::little_endian(width, self.config.eight_bit);
        let mut channels: Vec<Vec<f32>> = (0..channel_count)
            .map(|_| Vec::with_capacity(frame_count))
            .collect();

        for frame in 0..frame_count {
            let frame_start = data_offset + frame * frame_size;
            for (index, channel) in channels.iter_mut().enumerate() {
                let offset = frame_start + index * bytes_per_sample;
                channel.push(converter.decode_at(bytes, offset)?);
            }
        }

        debug!(frames = frame_count, "Decoded PCM samples");
        Ok(DecodedAudio::from_channels(channels))
    }

    /// Scan and decode `bytes` in one pass.
    pub fn read(&self, bytes: &[u8]) -> Result<WavFile> {
        let ScanResult {
            header,
            data_offset,
        } = self.scan(bytes)?;
        let audio = self.decode(bytes, &header, data_offset)?;
        Ok(WavFile { header, audio })
    }

    /// Load a file fully into memory and decode it.
    #[instrument(level = "debug", skip(self, path))]
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<WavFile> {
        let path = path.as_ref();
        let name = path.to_string_lossy();
        let bytes = std::fs::read(path)?;
        debug!(file = strip_path(&name), len = bytes.len(), "Loaded file");
        self.read(&bytes)
    }

    /// Number of sample bytes to decode, after applying the data size policy.
    fn data_len(&self, bytes: &[u8], header: &WaveHeader, data_offset: usize) -> Result<usize> {
        let declared = header.subchunk2_size as usize;
        let available = bytes.len().saturating_sub(data_offset);

        if declared <= available {
            return Ok(declared);
        }

        match self.config.data_size_policy {
            DataSizePolicy::Strict => Err(WavError::TruncatedBuffer {
                offset: data_offset,
                needed: declared,
                available,
            }),
            DataSizePolicy::ClampToBuffer => {
                warn!(declared, available, "Data chunk exceeds buffer, clamping");
                Ok(available)
            }
        }
    }
}

/// Decode sample data with the default configuration.
pub fn decode(bytes: &[u8], header: &WaveHeader, data_offset: usize) -> Result<DecodedAudio> {
    WavDecoder::default().decode(bytes, header, data_offset)
}

/// Scan and decode `bytes` with the default configuration.
pub fn read(bytes: &[u8]) -> Result<WavFile> {
    WavDecoder::default().read(bytes)
}

/// Load and decode a file with the default configuration.
pub fn read_file(path: impl AsRef<Path>) -> Result<WavFile> {
    WavDecoder::default().read_file(path)
}
