//! Selectable color filter presets.
//!
//! Filter id 0 means "no filter"; ids 1..=FILTER_PRESETS.len() index into
//! the table below in cycling order.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FilterPreset {
    /// Drops all color: chroma forced to neutral.
    Mono,
    /// Inverts every luma and chroma byte.
    Negative,
    /// Replaces chroma with a fixed brown cast.
    Sepia { u: u8, v: u8 },
    /// Scales U bytes by `gain_u` and V bytes by `gain_v`.
    Gain { gain_u: f64, gain_v: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterSpec {
    pub name: &'static str,
    pub preset: FilterPreset,
}

const fn gain(name: &'static str, gain_u: f64, gain_v: f64) -> FilterSpec {
    FilterSpec {
        name,
        preset: FilterPreset::Gain { gain_u, gain_v },
    }
}

pub const FILTER_PRESETS: &[FilterSpec] = &[
    FilterSpec {
        name: "mono",
        preset: FilterPreset::Mono,
    },
    FilterSpec {
        name: "negative",
        preset: FilterPreset::Negative,
    },
    FilterSpec {
        name: "sepia",
        preset: FilterPreset::Sepia { u: 114, v: 144 },
    },
    gain("red1", 0.95, 1.05),
    gain("red2", 0.9, 1.07),
    gain("red3", 0.85, 1.1),
    gain("blue1", 1.05, 0.95),
    gain("blue2", 1.07, 0.9),
    gain("blue3", 1.1, 0.85),
    gain("green1", 0.97, 0.96),
    gain("green2", 0.95, 0.95),
    gain("green3", 0.93, 0.93),
];

/// Number of filter slots including "off".
pub const FILTER_SLOTS: usize = FILTER_PRESETS.len() + 1;

/// Preset for a filter id; `None` for id 0 and unknown ids.
pub fn filter_spec(id: usize) -> Option<&'static FilterSpec> {
    id.checked_sub(1).and_then(|i| FILTER_PRESETS.get(i))
}
