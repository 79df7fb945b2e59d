//! # Volume Analysis
//!
//! Windowed peak-to-peak levels over decoded channel data, for renderers that
//! scale or rotate visuals with loudness.

/// Peak-to-peak level of `window`.
///
/// Both extremes start at `0.0`, so a window that never crosses zero is
/// measured against silence rather than against its own minimum.
pub fn volume_level(window: &[f32]) -> f32 {
    let (min, max) = window
        .iter()
        .fold((0.0f32, 0.0f32), |(min, max), &s| (min.min(s), max.max(s)));
    max - min
}

/// Level of `samples[start..end]`, or `None` if the range is out of bounds.
pub fn volume_level_in(samples: &[f32], start: usize, end: usize) -> Option<f32> {
    samples.get(start..end).map(volume_level)
}

/// One level per consecutive window of `window_size` samples.
///
/// The final window may be shorter. A `window_size` of zero yields nothing.
pub fn volume_envelope(samples: &[f32], window_size: usize) -> Vec<f32> {
    if window_size == 0 {
        return Vec::new();
    }
    samples.chunks(window_size).map(volume_level).collect()
}

/// Level of the window that contains `position` seconds into a channel.
///
/// Convenience for per-frame update loops that know the current playback
/// time and sampling rate.
pub fn volume_at(samples: &[f32], sampling_rate: u32, position_secs: f64, window_size: usize) -> f32 {
    if window_size == 0 || sampling_rate == 0 || position_secs < 0.0 {
        return 0.0;
    }
    let start = (position_secs * f64::from(sampling_rate)) as usize;
    let end = start.saturating_add(window_size).min(samples.len());
    volume_level_in(samples, start.min(end), end).unwrap_or(0.0)
}
