/// Which overlay, if any, is applied to preview frames.
///
/// Sticker and filter are mutually exclusive: the live face detector has a
/// single consumer, so only one of them can own the preview at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayMode {
    #[default]
    Idle,
    Sticker(usize),
    Filter(usize),
}

impl OverlayMode {
    pub fn is_sticker(self) -> bool {
        matches!(self, OverlayMode::Sticker(_))
    }

    pub fn is_filter(self) -> bool {
        matches!(self, OverlayMode::Filter(_))
    }
}

/// What the camera glue must do with live face detection after a mode change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectionControl {
    Start,
    Stop,
    Unchanged,
}

/// Result of a mode change request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: OverlayMode,
    pub to: OverlayMode,
    pub detection: DetectionControl,
}

impl Transition {
    pub fn between(from: OverlayMode, to: OverlayMode) -> Self {
        let detection = match (from.is_sticker(), to.is_sticker()) {
            (false, true) => DetectionControl::Start,
            (true, false) => DetectionControl::Stop,
            _ => DetectionControl::Unchanged,
        };
        Self {
            from,
            to,
            detection,
        }
    }

    /// A request that left the mode as it was.
    pub fn none(mode: OverlayMode) -> Self {
        Self::between(mode, mode)
    }

    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}
