//! # WAVE Header Types
//!
//! Container metadata produced by the chunk scanner.

use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// Audio format code for uncompressed linear PCM.
pub const WAVE_FORMAT_PCM: u16 = 1;

/// Size of the canonical PCM fmt payload in bytes.
pub const CANONICAL_FMT_SIZE: u32 = 16;

/// Four-character chunk tag.
///
/// Compared by byte equality, never as text.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCc(pub [u8; 4]);

impl FourCc {
    pub const RIFF: FourCc = FourCc(*b"RIFF");
    pub const WAVE: FourCc = FourCc(*b"WAVE");
    pub const FMT: FourCc = FourCc(*b"fmt ");
    pub const DATA: FourCc = FourCc(*b"data");
    pub const LIST: FourCc = FourCc(*b"LIST");

    pub const fn new(bytes: [u8; 4]) -> Self {
        FourCc(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in &self.0 {
            if byte.is_ascii_graphic() || byte == b' ' {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\x{:02x}", byte)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCc(\"{}\")", self)
    }
}

impl Serialize for FourCc {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Validated RIFF/WAVE header.
///
/// Only the chunk scanner builds this type, and only after every required
/// field has been read and checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaveHeader {
    /// `"RIFF"`
    pub chunk_id: FourCc,
    /// Declared size of everything after the first 8 bytes.
    pub chunk_size: u32,
    /// `"WAVE"`
    pub format: FourCc,
    /// `"fmt "`
    pub subchunk1_id: FourCc,
    /// Declared fmt payload size (16 for canonical PCM).
    pub subchunk1_size: u32,
    /// Always [`WAVE_FORMAT_PCM`].
    pub audio_format: u16,
    pub channel_count: u16,
    pub sampling_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    /// `"data"`
    pub subchunk2_id: FourCc,
    /// Declared sample data length in bytes.
    pub subchunk2_size: u32,
}

impl WaveHeader {
    /// Size of the fmt payload as declared by the file.
    pub fn format_data_size(&self) -> u32 {
        self.subchunk1_size
    }

    /// Size of the sample data as declared by the file.
    pub fn data_size(&self) -> u32 {
        self.subchunk2_size
    }

    pub fn bytes_per_sample(&self) -> usize {
        usize::from(self.bits_per_sample / 8)
    }

    /// Block alignment implied by channel count and bit depth.
    pub fn expected_block_align(&self) -> u32 {
        u32::from(self.channel_count) * u32::from(self.bits_per_sample / 8)
    }

    /// Byte rate implied by sampling rate and block alignment.
    pub fn expected_byte_rate(&self) -> u64 {
        u64::from(self.sampling_rate) * u64::from(self.expected_block_align())
    }

    /// Number of complete frames described by the data chunk.
    pub fn frame_count(&self) -> usize {
        let frame_size = self.expected_block_align() as usize;
        if frame_size == 0 {
            return 0;
        }
        self.subchunk2_size as usize / frame_size
    }

    /// Playback length of the declared sample data.
    ///
    /// `None` when the sampling rate is zero.
    pub fn duration(&self) -> Option<Duration> {
        if self.sampling_rate == 0 {
            return None;
        }
        Some(Duration::from_secs_f64(
            self.frame_count() as f64 / f64::from(self.sampling_rate),
        ))
    }

    pub fn is_pcm(&self) -> bool {
        self.audio_format == WAVE_FORMAT_PCM
    }
}

impl fmt::Display for WaveHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChunkID:{}\tChunkSize:{}\tFormat:{}\tSubChunk1ID:{}\tSubChunk1Size:{}\t\
             AudioFormat:{}\tChannels:{}\tSamplingRate:{}\tByteRate:{}\tBlockAlign:{}\t\
             BitsPerSample:{}\tSubChunk2ID:{}\tSubChunk2Size:{}",
            self.chunk_id,
            self.chunk_size,
            self.format,
            self.subchunk1_id,
            self.subchunk1_size,
            self.audio_format,
            self.channel_count,
            self.sampling_rate,
            self.byte_rate,
            self.block_align,
            self.bits_per_sample,
            self.subchunk2_id,
            self.subchunk2_size,
        )
    }
}
