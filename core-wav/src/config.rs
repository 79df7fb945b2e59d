//! # Decoder Configuration
//!
//! Knobs for the places where WAVE files in the wild disagree with the
//! canonical layout. The defaults reproduce the reference behavior exactly.

use serde::{Deserialize, Serialize};

/// Decoder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// How unsigned 8-bit samples map to floats.
    ///
    /// Default: [`EightBitMapping::Legacy`].
    #[serde(default)]
    pub eight_bit: EightBitMapping,

    /// Which channel counts are accepted.
    ///
    /// Default: [`ChannelPolicy::Any`].
    #[serde(default)]
    pub channel_policy: ChannelPolicy,

    /// Skip the RIFF pad byte that follows an odd-sized chunk.
    ///
    /// Default: false.
    #[serde(default = "default_align_odd_chunks")]
    pub align_odd_chunks: bool,

    /// What to do when the data chunk declares more bytes than the buffer holds.
    ///
    /// Default: [`DataSizePolicy::Strict`].
    #[serde(default)]
    pub data_size_policy: DataSizePolicy,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            eight_bit: EightBitMapping::default(),
            channel_policy: ChannelPolicy::default(),
            align_odd_chunks: default_align_odd_chunks(),
            data_size_policy: DataSizePolicy::default(),
        }
    }
}

impl DecoderConfig {
    /// Only mono/stereo, and every declared byte must be present.
    pub fn strict() -> Self {
        Self {
            channel_policy: ChannelPolicy::MonoOrStereo,
            data_size_policy: DataSizePolicy::Strict,
            ..Default::default()
        }
    }

    /// Accept what real-world writers produce: pad bytes, any channel count,
    /// and data chunks whose size field overstates the payload.
    pub fn lenient() -> Self {
        Self {
            channel_policy: ChannelPolicy::Any,
            align_odd_chunks: true,
            data_size_policy: DataSizePolicy::ClampToBuffer,
            ..Default::default()
        }
    }

    pub fn with_eight_bit(mut self, mapping: EightBitMapping) -> Self {
        self.eight_bit = mapping;
        self
    }

    pub fn with_channel_policy(mut self, policy: ChannelPolicy) -> Self {
        self.channel_policy = policy;
        self
    }

    pub fn with_odd_chunk_alignment(mut self, align: bool) -> Self {
        self.align_odd_chunks = align;
        self
    }

    pub fn with_data_size_policy(mut self, policy: DataSizePolicy) -> Self {
        self.data_size_policy = policy;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if let ChannelPolicy::AtMost(0) = self.channel_policy {
            return Err("channel_policy limit must be > 0".to_string());
        }

        Ok(())
    }
}

/// Mapping applied to unsigned 8-bit samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EightBitMapping {
    /// `byte / 128.0`, range `[0.0, 1.9921875]`.
    #[default]
    Legacy,
    /// `(byte - 128) / 128.0`, range `[-1.0, 0.9921875]`.
    Centered,
}

/// Channel counts accepted by the decoder. Zero channels is always rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelPolicy {
    /// Any count of one or more.
    #[default]
    Any,
    /// Exactly one or two channels.
    MonoOrStereo,
    /// Between one and the given count, inclusive.
    AtMost(u16),
}

impl ChannelPolicy {
    pub fn accepts(&self, channels: u16) -> bool {
        if channels == 0 {
            return false;
        }
        match self {
            ChannelPolicy::Any => true,
            ChannelPolicy::MonoOrStereo => channels <= 2,
            ChannelPolicy::AtMost(limit) => channels <= *limit,
        }
    }
}

/// Handling of a data chunk whose declared size runs past the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSizePolicy {
    /// Fail with `TruncatedBuffer`.
    #[default]
    Strict,
    /// Decode only the complete frames present in the buffer.
    ClampToBuffer,
}

fn default_align_odd_chunks() -> bool {
    false
}
