use crate::assets::domain::sticker_catalog::STICKER_SLOTS;
use crate::detection::domain::face_geometry::FaceGeometry;
use crate::filtering::domain::filter_preset::FILTER_SLOTS;

use super::gesture_tracker::GestureTracker;
use super::overlay_mode::{OverlayMode, Transition};
use super::pipeline_config::PipelineConfig;
use super::readiness::ModelReadiness;

/// Per-session overlay state, owned by the caller and handed to the
/// pipeline on every frame.
///
/// Mode-change requests from UI controls land here; the pipeline itself
/// only touches it through gesture handling in motion mode.
#[derive(Clone, Debug)]
pub struct PipelineState {
    mode: OverlayMode,
    motion: bool,
    readiness: ModelReadiness,
    gestures: GestureTracker,
    capture_requested: bool,
}

impl PipelineState {
    pub fn new(readiness: ModelReadiness, config: &PipelineConfig) -> Self {
        Self {
            mode: OverlayMode::Idle,
            motion: false,
            readiness,
            gestures: GestureTracker::new(config),
            capture_requested: false,
        }
    }

    pub fn mode(&self) -> OverlayMode {
        self.mode
    }

    pub fn motion_enabled(&self) -> bool {
        self.motion
    }

    pub fn is_model_ready(&self) -> bool {
        self.readiness.is_ready()
    }

    /// Selects the next sticker, wrapping to `Idle` after the last one.
    ///
    /// Leaves filter mode. Ignored until the landmark model is ready.
    pub fn advance_sticker(&mut self) -> Transition {
        if !self.readiness.is_ready() {
            log::info!("Sticker request ignored: landmark model not loaded yet");
            return Transition::none(self.mode);
        }
        let next = match self.mode {
            OverlayMode::Sticker(id) => (id + 1) % STICKER_SLOTS,
            _ => 1,
        };
        self.set_mode(sticker_mode(next))
    }

    /// Selects the next filter, wrapping to `Idle` after the last one.
    ///
    /// Leaves sticker mode, which also switches motion mode off.
    pub fn advance_filter(&mut self) -> Transition {
        let next = match self.mode {
            OverlayMode::Filter(id) => (id + 1) % FILTER_SLOTS,
            _ => 1,
        };
        let to = if next == 0 {
            OverlayMode::Idle
        } else {
            OverlayMode::Filter(next)
        };
        self.motion = false;
        self.set_mode(to)
    }

    /// Flips motion mode and returns the new setting. Always off while a
    /// filter is active.
    pub fn toggle_motion(&mut self) -> bool {
        self.motion = if self.mode.is_filter() {
            false
        } else {
            !self.motion
        };
        self.gestures.reset();
        log::info!("Motion mode {}", if self.motion { "on" } else { "off" });
        self.motion
    }

    /// Returns and clears the one-shot capture request.
    pub fn take_capture_request(&mut self) -> bool {
        std::mem::take(&mut self.capture_requested)
    }

    /// Runs gesture tracking on the first detected face.
    ///
    /// A head turn advances the sticker like a button press (ending sticker
    /// mode after the last one); an open mouth requests a capture.
    pub(crate) fn observe_gestures(&mut self, face: &FaceGeometry) -> Option<Transition> {
        let OverlayMode::Sticker(id) = self.mode else {
            return None;
        };
        if !self.motion {
            return None;
        }
        let events = self.gestures.observe(face);
        if events.mouth_open {
            log::info!("Mouth open: capture requested");
            self.capture_requested = true;
        }
        if !events.head_turn {
            return None;
        }
        let next = (id + 1) % STICKER_SLOTS;
        log::debug!("Head turn: advancing sticker to {next}");
        Some(self.set_mode(sticker_mode(next)))
    }

    fn set_mode(&mut self, to: OverlayMode) -> Transition {
        let transition = Transition::between(self.mode, to);
        if transition.changed() {
            log::info!("Overlay mode {:?} -> {:?}", transition.from, transition.to);
        }
        if !to.is_sticker() {
            self.gestures.reset();
        }
        self.mode = to;
        transition
    }
}

fn sticker_mode(id: usize) -> OverlayMode {
    if id == 0 {
        OverlayMode::Idle
    } else {
        OverlayMode::Sticker(id)
    }
}
