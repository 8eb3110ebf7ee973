//! The fixed sticker library.
//!
//! Sticker id 0 means "no sticker"; ids 1..=STICKERS.len() index into
//! [`STICKERS`]. Each entry says which landmark anchors which asset and
//! which keying rule composites it.

use crate::compositing::domain::blit_variant::{BlitVariant, LumaKeyParams, YuvKeyParams};
use crate::detection::domain::face_landmarks::{
    LEFT_BROW_INNER, NOSE_BRIDGE, NOSE_TIP, RIGHT_BROW_INNER, UPPER_LIP_TOP,
};

/// Sprite files, resolved against the sticker directory. Asset ids are
/// indices into this list.
pub const ASSET_FILES: &[&str] = &[
    "nyan.png",
    "rudolph.png",
    "santa.png",
    "mustache.png",
    "ear_left.png",
    "ear_right.png",
];

pub const NYAN: usize = 0;
pub const RUDOLPH: usize = 1;
pub const SANTA: usize = 2;
pub const MUSTACHE: usize = 3;
pub const EAR_LEFT: usize = 4;
pub const EAR_RIGHT: usize = 5;

/// One sprite placed relative to one landmark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub asset: usize,
    pub landmark: usize,
    /// Shift applied in landmark space before mapping; negative y moves
    /// up the face.
    pub offset: (i32, i32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StickerOverlay {
    Sprites {
        placements: &'static [Placement],
        variant: BlitVariant,
    },
    /// Debug view: a marker on every landmark, no asset needed.
    LandmarkMarkers,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StickerSpec {
    pub name: &'static str,
    pub overlay: StickerOverlay,
}

pub const STICKERS: &[StickerSpec] = &[
    StickerSpec {
        name: "nyan",
        overlay: StickerOverlay::Sprites {
            placements: &[Placement {
                asset: NYAN,
                landmark: NOSE_TIP,
                offset: (0, 0),
            }],
            variant: BlitVariant::LumaKey(LumaKeyParams::COPY),
        },
    },
    StickerSpec {
        name: "rudolph",
        overlay: StickerOverlay::Sprites {
            placements: &[Placement {
                asset: RUDOLPH,
                landmark: NOSE_TIP,
                offset: (0, 0),
            }],
            variant: BlitVariant::YuvKey(YuvKeyParams::STANDARD),
        },
    },
    StickerSpec {
        name: "santa",
        overlay: StickerOverlay::Sprites {
            placements: &[Placement {
                asset: SANTA,
                landmark: NOSE_BRIDGE,
                offset: (0, -24),
            }],
            variant: BlitVariant::YuvKey(YuvKeyParams::STANDARD),
        },
    },
    StickerSpec {
        name: "mustache",
        overlay: StickerOverlay::Sprites {
            placements: &[Placement {
                asset: MUSTACHE,
                landmark: UPPER_LIP_TOP,
                offset: (0, -3),
            }],
            variant: BlitVariant::LumaKey(LumaKeyParams::PLAIN),
        },
    },
    StickerSpec {
        name: "ears",
        overlay: StickerOverlay::Sprites {
            placements: &[
                Placement {
                    asset: EAR_LEFT,
                    landmark: LEFT_BROW_INNER,
                    offset: (0, -18),
                },
                Placement {
                    asset: EAR_RIGHT,
                    landmark: RIGHT_BROW_INNER,
                    offset: (0, -18),
                },
            ],
            variant: BlitVariant::LumaKey(LumaKeyParams::PLAIN),
        },
    },
    StickerSpec {
        name: "landmarks",
        overlay: StickerOverlay::LandmarkMarkers,
    },
];

/// Number of sticker slots including "none".
pub const STICKER_SLOTS: usize = STICKERS.len() + 1;

/// Catalog entry for a sticker id; `None` for id 0 and unknown ids.
pub fn sticker_spec(id: usize) -> Option<&'static StickerSpec> {
    id.checked_sub(1).and_then(|i| STICKERS.get(i))
}
