//! # Bounds-Checked Byte Reader
//!
//! Every multi-byte read goes through [`ByteReader`] and checks the buffer
//! length first, returning [`WavError::TruncatedBuffer`] instead of panicking.
//! Integers are composed with an explicit [`ByteOrder`], so results never
//! depend on the host's endianness.

use crate::error::{Result, WavError};
use crate::header::FourCc;
use tracing::trace;

/// Byte order of a multi-byte integer in the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Least significant byte first (the WAVE convention).
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    pub fn u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            ByteOrder::Little => u16::from_le_bytes(bytes),
            ByteOrder::Big => u16::from_be_bytes(bytes),
        }
    }

    pub fn u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            ByteOrder::Little => u32::from_le_bytes(bytes),
            ByteOrder::Big => u32::from_be_bytes(bytes),
        }
    }

    pub fn i16(self, bytes: [u8; 2]) -> i16 {
        match self {
            ByteOrder::Little => i16::from_le_bytes(bytes),
            ByteOrder::Big => i16::from_be_bytes(bytes),
        }
    }

    pub fn i32(self, bytes: [u8; 4]) -> i32 {
        match self {
            ByteOrder::Little => i32::from_le_bytes(bytes),
            ByteOrder::Big => i32::from_be_bytes(bytes),
        }
    }
}

/// Read `N` bytes at `offset` without advancing any cursor.
pub fn read_array<const N: usize>(bytes: &[u8], offset: usize) -> Result<[u8; N]> {
    let end = offset.checked_add(N).ok_or(WavError::TruncatedBuffer {
        offset,
        needed: N,
        available: 0,
    })?;

    match bytes.get(offset..end) {
        Some(slice) => {
            let mut out = [0u8; N];
            out.copy_from_slice(slice);
            Ok(out)
        }
        None => Err(WavError::TruncatedBuffer {
            offset,
            needed: N,
            available: bytes.len().saturating_sub(offset),
        }),
    }
}

/// Sequential reader over an immutable byte buffer.
///
/// The buffer is borrowed, never copied or mutated. A failed read leaves the
/// position unchanged.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    position: usize,
    order: ByteOrder,
}

impl<'a> ByteReader<'a> {
    /// Create a little-endian reader positioned at the start of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_order(bytes, ByteOrder::Little)
    }

    pub fn with_order(bytes: &'a [u8], order: ByteOrder) -> Self {
        Self {
            bytes,
            position: 0,
            order,
        }
    }

    /// Current offset from the start of the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left between the current position and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.bytes.len().saturating_sub(self.position)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Move forward by `count` bytes, stopping at the end of the buffer.
    ///
    /// Skipping is tolerant: a chunk that declares more bytes than remain
    /// simply exhausts the reader.
    pub fn skip(&mut self, count: usize) {
        let target = self.position.saturating_add(count).min(self.bytes.len());
        trace!(from = self.position, to = target, "Skipping bytes");
        self.position = target;
    }

    pub fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
        let out = read_array::<N>(self.bytes, self.position)?;
        self.position += N;
        Ok(out)
    }

    pub fn read_tag(&mut self) -> Result<FourCc> {
        self.read_bytes::<4>().map(FourCc::new)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let order = self.order;
        self.read_bytes::<2>().map(|b| order.u16(b))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let order = self.order;
        self.read_bytes::<4>().map(|b| order.u32(b))
    }
}
