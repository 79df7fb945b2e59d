//! End-to-end decoding tests
//!
//! This test suite verifies:
//! - Header scanning for canonical and non-canonical layouts
//! - Sample normalization at every supported bit depth
//! - Channel de-interleaving
//! - Error reporting for malformed or unsupported input

use core_wav::{
    read, scan, DecoderConfig, EightBitMapping, FourCc, WavDecoder, WavError,
};

// ============================================================================
// Test WAVE Builder
// ============================================================================

struct WavBuilder {
    format: u16,
    channels: u16,
    rate: u32,
    bits: u16,
    extra_chunks: Vec<([u8; 4], Vec<u8>)>,
    data: Vec<u8>,
    declared_data_size: Option<u32>,
}

impl WavBuilder {
    fn new(channels: u16, bits: u16) -> Self {
        Self {
            format: 1,
            channels,
            rate: 44_100,
            bits,
            extra_chunks: Vec::new(),
            data: Vec::new(),
            declared_data_size: None,
        }
    }

    fn with_format(mut self, format: u16) -> Self {
        self.format = format;
        self
    }

    fn with_chunk(mut self, tag: &[u8; 4], payload: &[u8]) -> Self {
        self.extra_chunks.push((*tag, payload.to_vec()));
        self
    }

    fn with_data(mut self, data: Vec<u8>) -> Self {
        self.data = data;
        self
    }

    fn with_i16_samples(self, samples: &[i16]) -> Self {
        let data = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        self.with_data(data)
    }

    fn with_i32_samples(self, samples: &[i32]) -> Self {
        let data = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        self.with_data(data)
    }

    fn with_declared_data_size(mut self, size: u32) -> Self {
        self.declared_data_size = Some(size);
        self
    }

    fn build(&self) -> Vec<u8> {
        let align = self.channels * (self.bits / 8);
        let mut body = Vec::new();
        body.extend_from_slice(b"WAVE");
        body.extend_from_slice(b"fmt ");
        body.extend_from_slice(&16u32.to_le_bytes());
        body.extend_from_slice(&self.format.to_le_bytes());
        body.extend_from_slice(&self.channels.to_le_bytes());
        body.extend_from_slice(&self.rate.to_le_bytes());
        body.extend_from_slice(&(self.rate * u32::from(align)).to_le_bytes());
        body.extend_from_slice(&align.to_le_bytes());
        body.extend_from_slice(&self.bits.to_le_bytes());

        for (tag, payload) in &self.extra_chunks {
            body.extend_from_slice(tag);
            body.extend_from_slice(&(payload.len() as u32).to_le_bytes());
            body.extend_from_slice(payload);
        }

        let data_size = self
            .declared_data_size
            .unwrap_or(self.data.len() as u32);
        body.extend_from_slice(b"data");
        body.extend_from_slice(&data_size.to_le_bytes());
        body.extend_from_slice(&self.data);

        let mut out = Vec::with_capacity(body.len() + 8);
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(body.len() as u32).to_le_bytes());
        out.extend_from_slice(&body);
        out
    }
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn test_mono_16_bit_length() {
    let samples: Vec<i16> = (0..100).map(|i| (i * 300) as i16).collect();
    let bytes = WavBuilder::new(1, 16).with_i16_samples(&samples).build();

    let wav = read(&bytes).unwrap();
    assert_eq!(wav.audio.channel_count(), 1);
    assert_eq!(wav.audio.frames(), wav.header.subchunk2_size as usize / 2);
    assert_eq!(wav.audio.frames(), 100);
}

#[test]
fn test_zero_samples_decode_to_zero_at_every_depth() {
    for bits in [8u16, 16, 32] {
        let bytes = WavBuilder::new(2, bits).with_data(vec![0u8; 64]).build();
        let wav = read(&bytes).unwrap();
        for channel in wav.audio.channels() {
            assert!(!channel.is_empty());
            assert!(channel.iter().all(|&s| s == 0.0), "bits {}", bits);
        }
    }
}

#[test]
fn test_16_bit_full_scale() {
    let bytes = WavBuilder::new(1, 16)
        .with_i16_samples(&[32767, -32768, 0])
        .build();

    let wav = read(&bytes).unwrap();
    let channel = wav.audio.channel(0).unwrap();
    assert_eq!(channel[0], 32767.0 / 32768.0);
    assert!((channel[0] - 0.999969).abs() < 1e-6);
    assert_eq!(channel[1], -1.0);
    assert_eq!(channel[2], 0.0);
}

#[test]
fn test_32_bit_samples() {
    let bytes = WavBuilder::new(1, 32)
        .with_i32_samples(&[i32::MIN, 1 << 30, -(1 << 29)])
        .build();

    let wav = read(&bytes).unwrap();
    assert_eq!(wav.audio.channel(0), Some(&[-1.0, 0.5, -0.25][..]));
}

#[test]
fn test_8_bit_legacy_and_centered() {
    let bytes = WavBuilder::new(1, 8).with_data(vec![0, 64, 128, 255]).build();

    let legacy = read(&bytes).unwrap();
    assert_eq!(
        legacy.audio.channel(0),
        Some(&[0.0, 0.5, 1.0, 255.0 / 128.0][..])
    );

    let decoder =
        WavDecoder::new(DecoderConfig::default().with_eight_bit(EightBitMapping::Centered))
            .unwrap();
    let centered = decoder.read(&bytes).unwrap();
    assert_eq!(
        centered.audio.channel(0),
        Some(&[-1.0, -0.5, 0.0, 127.0 / 128.0][..])
    );
}

#[test]
fn test_stereo_deinterleave_preserves_order() {
    let (l0, r0, l1, r1) = (1000i16, -2000i16, 3000i16, -4000i16);
    let bytes = WavBuilder::new(2, 16)
        .with_i16_samples(&[l0, r0, l1, r1])
        .build();

    let wav = read(&bytes).unwrap();
    let norm = |v: i16| f32::from(v) / 32768.0;
    assert_eq!(wav.audio.channel(0), Some(&[norm(l0), norm(l1)][..]));
    assert_eq!(wav.audio.channel(1), Some(&[norm(r0), norm(r1)][..]));
    assert_eq!(
        wav.audio.interleaved(),
        vec![norm(l0), norm(r0), norm(l1), norm(r1)]
    );
}

#[test]
fn test_list_chunk_is_transparent() {
    let samples = [100i16, -100, 200, -200, 300, -300];
    let plain = WavBuilder::new(2, 16).with_i16_samples(&samples);
    let with_list = WavBuilder::new(2, 16)
        .with_i16_samples(&samples)
        .with_chunk(b"LIST", b"INFOINAM\x06\x00\x00\x00track\x00");

    let a = read(&plain.build()).unwrap();
    let b = read(&with_list.build()).unwrap();
    assert_eq!(a.audio, b.audio);
    assert_eq!(a.header.subchunk2_size, b.header.subchunk2_size);
}

#[test]
fn test_multiple_unknown_chunks_are_skipped() {
    let bytes = WavBuilder::new(1, 16)
        .with_chunk(b"fact", &[0u8; 4])
        .with_chunk(b"LIST", &[1u8; 26])
        .with_chunk(b"cue ", &[2u8; 28])
        .with_i16_samples(&[16384])
        .build();

    let wav = read(&bytes).unwrap();
    assert_eq!(wav.audio.channel(0), Some(&[0.5][..]));
}

#[test]
fn test_surround_channels() {
    let samples: Vec<i16> = (0..12).map(|i| i * 1024).collect();
    let bytes = WavBuilder::new(6, 16).with_i16_samples(&samples).build();

    let wav = read(&bytes).unwrap();
    assert_eq!(wav.audio.channel_count(), 6);
    assert_eq!(wav.audio.frames(), 2);
    assert_eq!(wav.audio.channel(5).unwrap()[1], 11.0 * 1024.0 / 32768.0);
}

#[test]
fn test_decode_is_deterministic() {
    let samples: Vec<i16> = (0..512).map(|i| ((i * 7919) % 65536 - 32768) as i16).collect();
    let bytes = WavBuilder::new(2, 16).with_i16_samples(&samples).build();

    let first = read(&bytes).unwrap();
    let second = read(&bytes).unwrap();
    for (a, b) in first.audio.channels().iter().zip(second.audio.channels()) {
        let a_bits: Vec<u32> = a.iter().map(|s| s.to_bits()).collect();
        let b_bits: Vec<u32> = b.iter().map(|s| s.to_bits()).collect();
        assert_eq!(a_bits, b_bits);
    }
}

#[test]
fn test_scan_then_decode_matches_read() {
    let bytes = WavBuilder::new(2, 16)
        .with_chunk(b"LIST", &[0u8; 10])
        .with_i16_samples(&[1, 2, 3, 4])
        .build();

    let scanned = scan(&bytes).unwrap();
    let decoded = core_wav::decode(&bytes, &scanned.header, scanned.data_offset).unwrap();
    let wav = read(&bytes).unwrap();
    assert_eq!(scanned.header, wav.header);
    assert_eq!(decoded, wav.audio);
}

#[test]
fn test_header_fields() {
    let bytes = WavBuilder::new(2, 16).with_i16_samples(&[0; 8]).build();
    let wav = read(&bytes).unwrap();

    assert_eq!(wav.header.chunk_id, FourCc::RIFF);
    assert_eq!(wav.header.chunk_size as usize, bytes.len() - 8);
    assert_eq!(wav.header.audio_format, 1);
    assert_eq!(wav.header.sampling_rate, 44_100);
    assert_eq!(wav.header.byte_rate, 176_400);
    assert_eq!(wav.header.block_align, 4);
    assert_eq!(wav.header.subchunk2_size, 16);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_rifx_is_not_riff() {
    let mut bytes = WavBuilder::new(1, 16).with_i16_samples(&[0; 4]).build();
    bytes[0..4].copy_from_slice(b"RIFX");
    assert!(matches!(read(&bytes), Err(WavError::NotRiffContainer)));
}

#[test]
fn test_truncated_fmt_chunk() {
    let bytes = WavBuilder::new(1, 16).with_i16_samples(&[0; 4]).build();
    for len in [0, 3, 12, 20, 30, 35] {
        let result = read(&bytes[..len]);
        assert!(
            matches!(result, Err(WavError::TruncatedBuffer { .. })),
            "len {} gave {:?}",
            len,
            result
        );
    }
}

#[test]
fn test_ieee_float_rejected() {
    let bytes = WavBuilder::new(1, 32)
        .with_format(3)
        .with_data(vec![0; 8])
        .build();
    assert!(matches!(
        read(&bytes),
        Err(WavError::UnsupportedAudioFormat(3))
    ));
}

#[test]
fn test_24_bit_rejected() {
    let bytes = WavBuilder::new(1, 24).with_data(vec![0; 9]).build();
    assert!(matches!(read(&bytes), Err(WavError::UnsupportedBitDepth(24))));
}

#[test]
fn test_restrictive_channel_policy() {
    let bytes = WavBuilder::new(4, 16).with_data(vec![0; 16]).build();
    let decoder = WavDecoder::new(DecoderConfig::strict()).unwrap();
    assert!(matches!(
        decoder.read(&bytes),
        Err(WavError::UnsupportedChannelCount(4))
    ));
}

#[test]
fn test_missing_data_chunk() {
    let mut bytes = WavBuilder::new(1, 16).with_i16_samples(&[0; 4]).build();
    let data_tag = bytes.len() - 16;
    bytes[data_tag..data_tag + 4].copy_from_slice(b"junk");
    assert!(matches!(read(&bytes), Err(WavError::MissingDataChunk)));
}

#[test]
fn test_declared_data_past_end() {
    let builder = WavBuilder::new(1, 16)
        .with_i16_samples(&[16384, 16384])
        .with_declared_data_size(1000);
    let bytes = builder.build();

    assert!(matches!(
        read(&bytes),
        Err(WavError::TruncatedBuffer { needed: 1000, .. })
    ));

    let lenient = WavDecoder::new(DecoderConfig::lenient()).unwrap();
    let wav = lenient.read(&bytes).unwrap();
    assert_eq!(wav.audio.channel(0), Some(&[0.5, 0.5][..]));
}

#[test]
fn test_input_is_not_mutated() {
    let bytes = WavBuilder::new(2, 16).with_i16_samples(&[1, 2, 3, 4]).build();
    let copy = bytes.clone();
    let _ = read(&bytes).unwrap();
    let mut broken = bytes.clone();
    broken[8] = b'X';
    let _ = read(&broken);
    assert_eq!(bytes, copy);
}

// ============================================================================
// File Loading
// ============================================================================

#[test]
fn test_read_file_round_trip_from_disk() {
    let bytes = WavBuilder::new(1, 16).with_i16_samples(&[-16384, 16384]).build();
    let path = std::env::temp_dir().join(format!("core_wav_test_{}.wav", std::process::id()));
    std::fs::write(&path, &bytes).unwrap();

    let wav = core_wav::read_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(wav.audio.channel(0), Some(&[-0.5, 0.5][..]));
}
