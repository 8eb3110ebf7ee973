//! Keying rules used when copying a sprite into a frame.
//!
//! The two families carry separately tuned thresholds; they are kept as
//! distinct named parameter sets rather than merged.

/// Luma above this is background for the plain copy.
pub const COPY_KEY_THRESHOLD: u8 = 220;

/// Copy variant writes the source pair with U and V exchanged.
pub const COPY_CHROMA_OFFSET: usize = 1;

/// Color-aware copy: luma above this is a background candidate.
pub const YUV_BRIGHT_THRESHOLD: u8 = 230;

/// Color-aware copy: inclusive near-gray chroma band for background.
pub const YUV_NEUTRAL_BAND: (u8, u8) = (124, 132);

/// Parameters for the plain luma-keyed copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LumaKeyParams {
    /// Source luma strictly above this is left transparent.
    pub threshold: u8,
    /// 0 writes (U, V) in source order, 1 exchanges them within the pair.
    pub chroma_offset: usize,
}

impl LumaKeyParams {
    pub const COPY: Self = Self {
        threshold: COPY_KEY_THRESHOLD,
        chroma_offset: COPY_CHROMA_OFFSET,
    };

    pub const PLAIN: Self = Self {
        threshold: COPY_KEY_THRESHOLD,
        chroma_offset: 0,
    };
}

/// Parameters for the color-aware copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YuvKeyParams {
    pub bright_threshold: u8,
    /// Inclusive chroma range treated as neutral gray.
    pub neutral_band: (u8, u8),
    /// Write the destination pair as (V, U).
    pub swap_chroma: bool,
}

impl YuvKeyParams {
    pub const STANDARD: Self = Self {
        bright_threshold: YUV_BRIGHT_THRESHOLD,
        neutral_band: YUV_NEUTRAL_BAND,
        swap_chroma: true,
    };

    /// True when a source pixel counts as background.
    pub fn is_background(&self, y: u8, u: u8, v: u8) -> bool {
        let (lo, hi) = self.neutral_band;
        y > self.bright_threshold && (lo..=hi).contains(&u) && (lo..=hi).contains(&v)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlitVariant {
    LumaKey(LumaKeyParams),
    YuvKey(YuvKeyParams),
}
