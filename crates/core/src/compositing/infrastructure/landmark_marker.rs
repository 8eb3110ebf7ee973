use crate::detection::domain::landmark_mapper::Anchor;
use crate::shared::frame::PlanarFrame;

pub const DEFAULT_MARKER_SIZE: u32 = 4;

/// Debug overlay: a small dark square on every landmark anchor.
pub struct LandmarkMarker {
    size: u32,
    luma: u8,
}

impl LandmarkMarker {
    pub fn new(size: u32) -> Self {
        Self { size, luma: 0 }
    }

    pub fn draw(&self, frame: &mut PlanarFrame<'_>, anchors: &[Anchor]) {
        let half = (self.size / 2) as i64;
        for anchor in anchors {
            let (left, top) = (anchor.x as i64 - half, anchor.y as i64 - half);
            for dy in 0..self.size as i64 {
                for dx in 0..self.size as i64 {
                    if let Some(pt) = frame.luma_index(left + dx, top + dy) {
                        frame.luma_mut()[pt] = self.luma;
                    }
                }
            }
        }
    }
}

impl Default for LandmarkMarker {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_SIZE)
    }
}
