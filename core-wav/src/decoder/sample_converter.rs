//! # Sample Format Converter
//!
//! Turns raw PCM sample bytes into normalized `f32` values.
//!
//! | Bits | Source type | Mapping |
//! |------|-------------|---------|
//! | 8    | `u8`        | `b / 128.0` (or `(b - 128) / 128.0` when centered) |
//! | 16   | `i16`       | `v / 32768.0` |
//! | 32   | `i32`       | `v / 2147483648.0` |

use crate::config::EightBitMapping;
use crate::error::{Result, WavError};
use crate::reader::{read_array, ByteOrder};
use tracing::warn;

/// Storage width of one PCM sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleWidth {
    U8,
    I16,
    I32,
}

impl SampleWidth {
    /// Map a `bits_per_sample` field to a supported width.
    pub fn from_bits(bits: u16) -> Result<Self> {
        match bits {
            8 => Ok(SampleWidth::U8),
            16 => Ok(SampleWidth::I16),
            32 => Ok(SampleWidth::I32),
            other => Err(WavError::UnsupportedBitDepth(other)),
        }
    }

    pub fn bytes(self) -> usize {
        match self {
            SampleWidth::U8 => 1,
            SampleWidth::I16 => 2,
            SampleWidth::I32 => 4,
        }
    }
}

/// Decodes single samples at arbitrary offsets of a buffer.
#[derive(Debug, Clone, Copy)]
pub struct SampleConverter {
    width: SampleWidth,
    order: ByteOrder,
    eight_bit: EightBitMapping,
}

impl SampleConverter {
    pub fn new(width: SampleWidth, order: ByteOrder, eight_bit: EightBitMapping) -> Self {
        Self {
            width,
            order,
            eight_bit,
        }
    }

    /// Little-endian converter, as mandated for WAVE sample data.
    pub fn little_endian(width: SampleWidth, eight_bit: EightBitMapping) -> Self {
        Self::new(width, ByteOrder::Little, eight_bit)
    }

    pub fn width(&self) -> SampleWidth {
        self.width
    }

    /// Read and normalize the sample starting at `offset`.
    pub fn decode_at(&self, bytes: &[u8], offset: usize) -> Result<f32> {
        match self.width {
            SampleWidth::U8 => {
                let [byte] = read_array::<1>(bytes, offset)?;
                Ok(self.normalize_u8(byte))
            }
            SampleWidth::I16 => {
                let value = self.order.i16(read_array::<2>(bytes, offset)?);
                Ok(f32::from(value) / 32768.0)
            }
            SampleWidth::I32 => {
                let value = self.order.i32(read_array::<4>(bytes, offset)?);
                Ok((f64::from(value) / 2_147_483_648.0) as f32)
            }
        }
    }

    fn normalize_u8(&self, byte: u8) -> f32 {
        match self.eight_bit {
            EightBitMapping::Legacy => f32::from(byte) / 128.0,
            EightBitMapping::Centered => (f32::from(byte) - 128.0) / 128.0,
        }
    }
}

/// Count samples outside `[-1.0, 1.0]`, warning if any are found.
///
/// The legacy 8-bit mapping produces values up to `1.9921875`, so this is
/// non-zero for most 8-bit material decoded that way.
pub fn count_clipped(samples: &[f32]) -> usize {
    let clipped = samples.iter().filter(|&&s| !(-1.0..=1.0).contains(&s)).count();

    if clipped > 0 {
        warn!(
            "Detected {} clipped samples ({:.2}% of total)",
            clipped,
            (clipped as f64 / samples.len() as f64) * 100.0
        );
    }

    clipped
}

/// Clamp samples to `[-1.0, 1.0]` in place.
pub fn clamp_samples(samples: &mut [f32]) {
    for sample in samples.iter_mut() {
        *sample = sample.clamp(-1.0, 1.0);
    }
}
