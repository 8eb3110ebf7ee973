use crate::filtering::domain::filter_preset::FilterPreset;
use crate::shared::constants::NEUTRAL_CHROMA;
use crate::shared::frame::PlanarFrame;

/// Scales one byte by `gain`, clamped to the byte range and truncated.
pub fn scale_byte(value: u8, gain: f64) -> u8 {
    (value as f64 * gain).clamp(0.0, 255.0) as u8
}

/// Frame-wide chroma rescaling: even chroma bytes (U) by `gain_u`, odd
/// bytes (V) by `gain_v`. Luma is untouched.
pub fn apply_gains(frame: &mut PlanarFrame<'_>, gain_u: f64, gain_v: f64) {
    for pair in frame.chroma_mut().chunks_exact_mut(2) {
        pair[0] = scale_byte(pair[0], gain_u);
        pair[1] = scale_byte(pair[1], gain_v);
    }
}

/// Applies a preset to the whole frame in place.
pub fn apply(frame: &mut PlanarFrame<'_>, preset: FilterPreset) {
    match preset {
        FilterPreset::Gain { gain_u, gain_v } => apply_gains(frame, gain_u, gain_v),
        FilterPreset::Mono => frame.chroma_mut().fill(NEUTRAL_CHROMA),
        FilterPreset::Negative => {
            for b in frame.luma_mut() {
                *b = 255 - *b;
            }
            for b in frame.chroma_mut() {
                *b = 255 - *b;
            }
        }
        FilterPreset::Sepia { u, v } => {
            for pair in frame.chroma_mut().chunks_exact_mut(2) {
                pair[0] = u;
                pair[1] = v;
            }
        }
    }
}
