//! Decoded per-channel sample storage.

use serde::Serialize;

/// Normalized samples, one contiguous sequence per channel.
///
/// All channels hold the same number of frames.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DecodedAudio {
    channels: Vec<Vec<f32>>,
}

impl DecodedAudio {
    pub(crate) fn from_channels(channels: Vec<Vec<f32>>) -> Self {
        debug_assert!(channels.windows(2).all(|w| w[0].len() == w[1].len()));
        Self { channels }
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.frames() == 0
    }

    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    pub fn channels(&self) -> &[Vec<f32>] {
        &self.channels
    }

    pub fn into_channels(self) -> Vec<Vec<f32>> {
        self.channels
    }

    /// Re-interleave into frame order (LRLR... for stereo).
    pub fn interleaved(&self) -> Vec<f32> {
        let frames = self.frames();
        let mut out = Vec::with_capacity(frames * self.channels.len());
        for frame in 0..frames {
            for channel in &self.channels {
                out.push(channel[frame]);
            }
        }
        out
    }

    /// Average all channels into a single sequence.
    pub fn mix_to_mono(&self) -> Vec<f32> {
        match self.channels.as_slice() {
            [] => Vec::new(),
            [only] => only.clone(),
            all => {
                let scale = 1.0 / all.len() as f32;
                (0..self.frames())
                    .map(|frame| all.iter().map(|c| c[frame]).sum::<f32>() * scale)
                    .collect()
            }
        }
    }
}
