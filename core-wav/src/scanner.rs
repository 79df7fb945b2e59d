//! # Chunk Scanner
//!
//! Validates the RIFF/WAVE/fmt preamble, reads the PCM format fields and
//! walks the remaining chunks until it reaches `"data"`.
//!
//! ```text
//! 0   "RIFF"  chunk_size  "WAVE"
//! 12  "fmt "  fmt_size    format channels rate byte_rate align bits [extra]
//! 36+ [tag size payload]*            (LIST, fact, ... skipped)
//!     "data"  data_size   samples...
//! ```
//!
//! The fmt chunk must come first. Any number of unknown chunks may sit
//! between it and the data chunk.

use crate::config::DecoderConfig;
use crate::error::{Result, WavError};
use crate::header::{FourCc, WaveHeader, CANONICAL_FMT_SIZE, WAVE_FORMAT_PCM};
use crate::reader::ByteReader;
use tracing::{debug, instrument, warn};

/// Size of a chunk preamble: 4-byte tag plus 4-byte length.
const CHUNK_HEADER_SIZE: usize = 8;

/// Validated header plus the offset where sample data begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub header: WaveHeader,
    /// Offset of the first sample byte, just past the `"data"` preamble.
    pub data_offset: usize,
}

/// Scan `bytes` with the default configuration.
pub fn scan(bytes: &[u8]) -> Result<ScanResult> {
    scan_with(bytes, &DecoderConfig::default())
}

/// Scan `bytes`, honoring `config.align_odd_chunks` while skipping chunks.
#[instrument(level = "debug", skip(bytes, config), fields(len = bytes.len()))]
pub fn scan_with(bytes: &[u8], config: &DecoderConfig) -> Result<ScanResult> {
    let mut reader = ByteReader::new(bytes);

    let chunk_id = reader.read_tag()?;
    if chunk_id != FourCc::RIFF {
        debug!(tag = %chunk_id, "Rejecting non-RIFF buffer");
        return Err(WavError::NotRiffContainer);
    }

    let chunk_size = reader.read_u32()?;

    let format = reader.read_tag()?;
    if format != FourCc::WAVE {
        debug!(tag = %format, "Rejecting non-WAVE RIFF form");
        return Err(WavError::NotWaveFormat);
    }

    let subchunk1_id = reader.read_tag()?;
    if subchunk1_id != FourCc::FMT {
        debug!(tag = %subchunk1_id, "First subchunk is not fmt");
        return Err(WavError::MissingFmtChunk);
    }

    let subchunk1_size = reader.read_u32()?;
    let audio_format = reader.read_u16()?;
    if audio_format != WAVE_FORMAT_PCM {
        return Err(WavError::UnsupportedAudioFormat(audio_format));
    }

    let channel_count = reader.read_u16()?;
    let sampling_rate = reader.read_u32()?;
    let byte_rate = reader.read_u32()?;
    let block_align = reader.read_u16()?;
    let bits_per_sample = reader.read_u16()?;

    // Trust the declared fmt size so extensible headers stay aligned.
    if subchunk1_size > CANONICAL_FMT_SIZE {
        let extra = (subchunk1_size - CANONICAL_FMT_SIZE) as usize;
        debug!(extra, "Skipping extended fmt fields");
        reader.skip(extra);
    }
    if config.align_odd_chunks && subchunk1_size % 2 == 1 {
        reader.skip(1);
    }

    let (subchunk2_id, subchunk2_size) = find_data_chunk(&mut reader, config)?;
    let data_offset = reader.position();

    let header = WaveHeader {
        chunk_id,
        chunk_size,
        format,
        subchunk1_id,
        subchunk1_size,
        audio_format,
        channel_count,
        sampling_rate,
        byte_rate,
        block_align,
        bits_per_sample,
        subchunk2_id,
        subchunk2_size,
    };

    check_consistency(&header, bytes.len());

    debug!(
        channels = header.channel_count,
        sampling_rate = header.sampling_rate,
        bits_per_sample = header.bits_per_sample,
        data_size = header.subchunk2_size,
        data_offset,
        "Scanned WAVE header"
    );

    Ok(ScanResult {
        header,
        data_offset,
    })
}

/// Walk chunk preambles until `"data"`, leaving the reader just past it.
fn find_data_chunk(reader: &mut ByteReader<'_>, config: &DecoderConfig) -> Result<(FourCc, u32)> {
    while reader.remaining() >= CHUNK_HEADER_SIZE {
        let offset = reader.position();
        let tag = reader.read_tag()?;
        let size = reader.read_u32()?;

        if tag == FourCc::DATA {
            return Ok((tag, size));
        }

        let mut skip = size as usize;
        if config.align_odd_chunks && size % 2 == 1 {
            skip = skip.saturating_add(1);
        }

        debug!(chunk = %tag, size, offset, "Skipping chunk");
        reader.skip(skip);
    }

    Err(WavError::MissingDataChunk)
}

/// Log header fields that disagree with each other or with the buffer.
/// None of these are fatal.
fn check_consistency(header: &WaveHeader, buffer_len: usize) {
    let expected_align = header.expected_block_align();
    if u32::from(header.block_align) != expected_align {
        warn!(
            declared = header.block_align,
            expected = expected_align,
            "block_align disagrees with channels and bit depth"
        );
    }

    let expected_rate = header.expected_byte_rate();
    if u64::from(header.byte_rate) != expected_rate {
        warn!(
            declared = header.byte_rate,
            expected = expected_rate,
            "byte_rate disagrees with sampling rate and block alignment"
        );
    }

    let riff_payload = buffer_len.saturating_sub(CHUNK_HEADER_SIZE);
    if header.chunk_size as usize > riff_payload {
        warn!(
            declared = header.chunk_size,
            available = riff_payload,
            "RIFF chunk_size exceeds buffer"
        );
    }
}
