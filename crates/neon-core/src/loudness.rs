//! Beat-scale derivation from the background-music loudness.

/// Capability interface over the audio analyser. `sample` returns the mean
/// byte-frequency amplitude (0..=255) for the current frame, or `None` when
/// no audio source is active.
pub trait LoudnessSource {
    fn sample(&mut self) -> Option<f32>;
}

pub const BEAT_SCALE_MIN: f32 = 1.0;
pub const BEAT_SCALE_MAX: f32 = 2.0;

/// Map a mean bin amplitude to the visual intensity multiplier.
#[inline]
pub fn beat_scale_from_mean(avg: f32) -> f32 {
    (BEAT_SCALE_MIN + avg / 256.0).clamp(BEAT_SCALE_MIN, BEAT_SCALE_MAX)
}
