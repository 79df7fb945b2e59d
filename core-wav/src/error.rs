//! # WAVE Decoding Error Types
//!
//! Every failure the scanner or decoder can report. All of them are terminal:
//! the caller gets a typed error and no partial header or sample data.

use thiserror::Error;

/// Errors that can occur while scanning or decoding a WAVE buffer.
#[derive(Error, Debug)]
pub enum WavError {
    // ========================================================================
    // Container Errors
    // ========================================================================
    /// The first four bytes are not `"RIFF"`.
    #[error("Not a RIFF container")]
    NotRiffContainer,

    /// Bytes 8..12 are not `"WAVE"`.
    #[error("RIFF container is not WAVE format")]
    NotWaveFormat,

    /// The first subchunk is not `"fmt "`.
    #[error("Missing fmt chunk")]
    MissingFmtChunk,

    /// The buffer ended before a `"data"` chunk was found.
    #[error("Missing data chunk")]
    MissingDataChunk,

    /// A read reached past the end of the buffer.
    #[error("Truncated buffer: needed {needed} bytes at offset {offset}, only {available} available")]
    TruncatedBuffer {
        offset: usize,
        needed: usize,
        available: usize,
    },

    // ========================================================================
    // Format Errors
    // ========================================================================
    /// Audio format code other than PCM (1).
    #[error("Unsupported audio format: {0} (only PCM/1 is supported)")]
    UnsupportedAudioFormat(u16),

    /// Bit depth other than 8, 16 or 32.
    #[error("Unsupported bit depth: {0} (expected 8, 16 or 32)")]
    UnsupportedBitDepth(u16),

    /// Channel count rejected by the active channel policy.
    #[error("Unsupported channel count: {0}")]
    UnsupportedChannelCount(u16),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Decoder configuration failed validation.
    #[error("Invalid decoder configuration: {0}")]
    InvalidConfig(String),

    /// I/O error while loading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WavError {
    /// Returns `true` if the buffer is not a usable RIFF/WAVE container.
    pub fn is_container_error(&self) -> bool {
        matches!(
            self,
            WavError::NotRiffContainer
                | WavError::NotWaveFormat
                | WavError::MissingFmtChunk
                | WavError::MissingDataChunk
        )
    }

    /// Returns `true` if the container is valid but describes audio this
    /// decoder does not handle.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            WavError::UnsupportedAudioFormat(_)
                | WavError::UnsupportedBitDepth(_)
                | WavError::UnsupportedChannelCount(_)
        )
    }

    /// Returns `true` if the buffer ended early.
    pub fn is_truncation(&self) -> bool {
        matches!(self, WavError::TruncatedBuffer { .. })
    }
}

/// Result type for WAVE decoding operations.
pub type Result<T> = std::result::Result<T, WavError>;
