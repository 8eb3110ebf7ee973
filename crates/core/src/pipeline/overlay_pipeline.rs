use std::time::Instant;

use crate::assets::domain::asset_store::AssetStore;
use crate::assets::domain::sticker_catalog::{sticker_spec, StickerOverlay, StickerSpec};
use crate::compositing::infrastructure::blitter_factory;
use crate::compositing::infrastructure::landmark_marker::LandmarkMarker;
use crate::detection::domain::face_geometry::FaceGeometry;
use crate::detection::domain::face_landmark_detector::FaceLandmarkDetector;
use crate::detection::domain::face_landmarks::LandmarkPoint;
use crate::detection::domain::landmark_mapper::LandmarkMapper;
use crate::filtering::domain::filter_preset::filter_spec;
use crate::filtering::infrastructure::chroma_filter;
use crate::shared::frame::{PixelFormat, PlanarFrame};

use super::overlay_mode::{OverlayMode, Transition};
use super::pipeline_config::PipelineConfig;
use super::pipeline_logger::{NullPipelineLogger, PipelineLogger};
use super::pipeline_state::PipelineState;

/// What a call to [`OverlayPipeline::process`] did to the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    /// Left untouched: idle, no faces yet, or detection failed.
    PassedThrough,
    /// Not a supported pixel format; left untouched.
    Rejected,
    /// Sticker drawn on `faces` faces.
    Composited { sticker: usize, faces: usize },
    Filtered { filter: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameOutcome {
    pub applied: Applied,
    /// One-shot: set on the frame the capture gesture fired.
    pub capture_requested: bool,
    /// Mode change caused by a gesture on this frame.
    pub transition: Option<Transition>,
}

/// Per-frame compositor. Called synchronously from the preview callback.
///
/// Reads the current mode from the caller's [`PipelineState`] and applies
/// exactly one of sticker compositing or a color filter, mutating the frame
/// in place. Never blocks: detection results come from whatever the
/// injected detector has at hand.
pub struct OverlayPipeline {
    assets: AssetStore,
    marker: LandmarkMarker,
    logger: Box<dyn PipelineLogger>,
}

impl OverlayPipeline {
    pub fn new(assets: AssetStore, config: &PipelineConfig) -> Self {
        Self {
            assets,
            marker: LandmarkMarker::new(config.marker_size),
            logger: Box::new(NullPipelineLogger),
        }
    }

    pub fn with_logger(mut self, logger: Box<dyn PipelineLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Swaps in a store, e.g. once background decoding has finished.
    pub fn set_assets(&mut self, assets: AssetStore) {
        self.assets = assets;
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    pub fn logger_mut(&mut self) -> &mut dyn PipelineLogger {
        self.logger.as_mut()
    }

    pub fn process(
        &mut self,
        state: &mut PipelineState,
        frame: &mut PlanarFrame<'_>,
        format: PixelFormat,
        detector: &mut dyn FaceLandmarkDetector,
    ) -> FrameOutcome {
        let mut transition = None;
        let applied = if !format.is_supported() {
            log::warn!("Preview format {format:?} is not supported, frame passed through");
            Applied::Rejected
        } else {
            match state.mode() {
                OverlayMode::Idle => Applied::PassedThrough,
                OverlayMode::Filter(id) => self.filter(frame, id),
                OverlayMode::Sticker(_) => self.composite(state, frame, detector, &mut transition),
            }
        };
        FrameOutcome {
            applied,
            capture_requested: state.take_capture_request(),
            transition,
        }
    }

    fn filter(&mut self, frame: &mut PlanarFrame<'_>, id: usize) -> Applied {
        let Some(spec) = filter_spec(id) else {
            return Applied::PassedThrough;
        };
        let start = Instant::now();
        chroma_filter::apply(frame, spec.preset);
        self.logger.timing("filter", elapsed_ms(start));
        Applied::Filtered { filter: id }
    }

    fn composite(
        &mut self,
        state: &mut PipelineState,
        frame: &mut PlanarFrame<'_>,
        detector: &mut dyn FaceLandmarkDetector,
        transition: &mut Option<Transition>,
    ) -> Applied {
        let start = Instant::now();
        let faces = match detector.detect(frame) {
            Ok(faces) => faces,
            Err(e) => {
                log::warn!("Face detection failed, frame passed through: {e}");
                return Applied::PassedThrough;
            }
        };
        self.logger.timing("detect", elapsed_ms(start));
        self.logger.metric("faces", faces.len() as f64);

        // gestures run first and may switch or end the sticker for this frame
        if let Some(first) = faces.first() {
            *transition = state.observe_gestures(first);
        }
        let OverlayMode::Sticker(id) = state.mode() else {
            return Applied::PassedThrough;
        };
        let Some(spec) = sticker_spec(id) else {
            return Applied::PassedThrough;
        };
        if faces.is_empty() {
            return Applied::PassedThrough;
        }

        let start = Instant::now();
        let drawn = self.draw_sticker(frame, spec, &faces);
        self.logger.timing("composite", elapsed_ms(start));
        if drawn == 0 {
            Applied::PassedThrough
        } else {
            Applied::Composited {
                sticker: id,
                faces: drawn,
            }
        }
    }

    /// Draws `spec` on every face that has landmarks; returns how many.
    fn draw_sticker(
        &self,
        frame: &mut PlanarFrame<'_>,
        spec: &StickerSpec,
        faces: &[FaceGeometry],
    ) -> usize {
        let mapper = LandmarkMapper::new(frame.height());
        let mut drawn = 0;
        for landmarks in faces.iter().filter_map(|f| f.landmarks.as_ref()) {
            match spec.overlay {
                StickerOverlay::Sprites {
                    placements,
                    variant,
                } => {
                    for placement in placements {
                        // unavailable assets are skipped silently
                        let Some(sprite) = self.assets.get(placement.asset) else {
                            continue;
                        };
                        let Some(point) = landmarks.part(placement.landmark) else {
                            continue;
                        };
                        let (dx, dy) = placement.offset;
                        let anchor = mapper.to_frame(LandmarkPoint::new(
                            point.x.saturating_add(dx),
                            point.y.saturating_add(dy),
                        ));
                        blitter_factory::blit(variant, frame, sprite, anchor);
                    }
                }
                StickerOverlay::LandmarkMarkers => {
                    self.marker.draw(frame, &mapper.all_anchors(landmarks));
                }
            }
            drawn += 1;
        }
        drawn
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::domain::sprite_asset::SpriteAsset;
    use crate::assets::domain::sticker_catalog::{ASSET_FILES, NYAN, STICKERS};
    use crate::detection::domain::face_geometry::FaceRect;
    use crate::detection::domain::face_landmarks::{
        FaceLandmarks, LOWER_LIP_BOTTOM, NOSE_BOTTOM, NOSE_TIP,
    };
    use crate::detection::infrastructure::replay_detector::ReplayDetector;
    use crate::pipeline::overlay_mode::DetectionControl;
    use crate::pipeline::readiness::ModelReadiness;
    use crate::shared::color::Yuv;
    use crate::shared::constants::LANDMARK_COUNT;
    use crate::shared::frame::Nv12Buffer;
    use rstest::rstest;

    const W: u32 = 176;
    const H: u32 = 144;

    fn sticker_id(name: &str) -> usize {
        STICKERS.iter().position(|s| s.name == name).unwrap() + 1
    }

    /// A face whose landmarks all sit at landmark-space (72, 88), which
    /// maps to frame (88, 72); `edit` moves individual points.
    fn face_with(edit: impl FnOnce(&mut [LandmarkPoint; LANDMARK_COUNT])) -> FaceGeometry {
        let mut points = [LandmarkPoint::new(72, 88); LANDMARK_COUNT];
        edit(&mut points);
        FaceGeometry::new(
            FaceRect::new(40, 100, 60, 120),
            Some(FaceLandmarks::new(points)),
        )
    }

    fn centered_face() -> FaceGeometry {
        face_with(|_| {})
    }

    fn pipeline_with_nyan() -> OverlayPipeline {
        let mut assets = vec![None; ASSET_FILES.len()];
        assets[NYAN] = Some(SpriteAsset::filled(20, 20, Yuv::new(50, 128, 128)).unwrap());
        OverlayPipeline::new(AssetStore::from_assets(assets), &PipelineConfig::default())
    }

    fn pipeline_with_every_asset() -> OverlayPipeline {
        let assets = (0..ASSET_FILES.len())
            .map(|_| SpriteAsset::filled(20, 20, Yuv::new(50, 128, 128)).ok())
            .collect();
        OverlayPipeline::new(AssetStore::from_assets(assets), &PipelineConfig::default())
    }

    fn empty_pipeline() -> OverlayPipeline {
        OverlayPipeline::new(AssetStore::default(), &PipelineConfig::default())
    }

    fn ready_state() -> PipelineState {
        PipelineState::new(ModelReadiness::ready(), &PipelineConfig::default())
    }

    fn sticker_state(id: usize) -> PipelineState {
        let mut state = ready_state();
        while state.mode() != OverlayMode::Sticker(id) {
            state.advance_sticker();
        }
        state
    }

    fn run(
        pipeline: &mut OverlayPipeline,
        state: &mut PipelineState,
        buffer: &mut Nv12Buffer,
        detector: &mut dyn FaceLandmarkDetector,
    ) -> FrameOutcome {
        let mut frame = buffer.as_frame().unwrap();
        pipeline.process(state, &mut frame, PixelFormat::Nv12, detector)
    }

    struct FailingDetector;

    impl FaceLandmarkDetector for FailingDetector {
        fn detect(
            &mut self,
            _frame: &PlanarFrame<'_>,
        ) -> Result<Vec<FaceGeometry>, Box<dyn std::error::Error>> {
            Err("model crashed".into())
        }
    }

    #[test]
    fn test_idle_passes_through() {
        let mut buffer = Nv12Buffer::filled(W, H, 100, 128);
        let before = buffer.clone();

        let outcome = run(
            &mut pipeline_with_nyan(),
            &mut ready_state(),
            &mut buffer,
            &mut ReplayDetector::fixed(vec![centered_face()]),
        );

        assert_eq!(outcome.applied, Applied::PassedThrough);
        assert!(!outcome.capture_requested);
        assert_eq!(buffer, before);
    }

    #[rstest]
    #[case::nv21(PixelFormat::Nv21)]
    #[case::i420(PixelFormat::I420)]
    #[case::rgb(PixelFormat::Rgb888)]
    fn test_unsupported_format_is_rejected(#[case] format: PixelFormat) {
        let mut pipeline = pipeline_with_nyan();
        let mut state = sticker_state(sticker_id("nyan"));
        let mut buffer = Nv12Buffer::filled(W, H, 100, 128);
        let before = buffer.clone();
        let mut frame = buffer.as_frame().unwrap();

        let outcome = pipeline.process(
            &mut state,
            &mut frame,
            format,
            &mut ReplayDetector::fixed(vec![centered_face()]),
        );

        assert_eq!(outcome.applied, Applied::Rejected);
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_sticker_composited_at_mapped_nose() {
        let nyan = sticker_id("nyan");
        let mut buffer = Nv12Buffer::filled(W, H, 100, 128);

        let outcome = run(
            &mut pipeline_with_nyan(),
            &mut sticker_state(nyan),
            &mut buffer,
            &mut ReplayDetector::fixed(vec![centered_face()]),
        );

        assert_eq!(
            outcome.applied,
            Applied::Composited {
                sticker: nyan,
                faces: 1
            }
        );
        let w = W as usize;
        assert_eq!(buffer.luma[72 * w + 88], 50);
        assert_eq!(buffer.luma[62 * w + 78], 50);
        assert_eq!(buffer.luma[61 * w + 78], 100);
        assert_eq!(buffer.luma[62 * w + 98], 100);
    }

    #[test]
    fn test_every_face_gets_a_sticker() {
        let other = face_with(|p| p.iter_mut().for_each(|q| *q = LandmarkPoint::new(110, 40)));
        let mut buffer = Nv12Buffer::filled(W, H, 100, 128);

        let outcome = run(
            &mut pipeline_with_nyan(),
            &mut sticker_state(sticker_id("nyan")),
            &mut buffer,
            &mut ReplayDetector::fixed(vec![centered_face(), other]),
        );

        assert!(matches!(outcome.applied, Applied::Composited { faces: 2, .. }));
        // second face maps to frame (40, 34)
        assert_eq!(buffer.luma[34 * W as usize + 40], 50);
    }

    #[test]
    fn test_no_faces_leaves_frame_untouched() {
        let mut buffer = Nv12Buffer::filled(W, H, 100, 128);
        let before = buffer.clone();

        let outcome = run(
            &mut pipeline_with_nyan(),
            &mut sticker_state(sticker_id("nyan")),
            &mut buffer,
            &mut ReplayDetector::fixed(Vec::new()),
        );

        assert_eq!(outcome.applied, Applied::PassedThrough);
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_missing_asset_is_skipped() {
        let mut buffer = Nv12Buffer::filled(W, H, 100, 128);
        let before = buffer.clone();

        run(
            &mut empty_pipeline(),
            &mut sticker_state(sticker_id("nyan")),
            &mut buffer,
            &mut ReplayDetector::fixed(vec![centered_face()]),
        );

        assert_eq!(buffer, before);
    }

    #[test]
    fn test_detector_error_passes_through() {
        let nyan = sticker_id("nyan");
        let mut state = sticker_state(nyan);
        let mut buffer = Nv12Buffer::filled(W, H, 100, 128);
        let before = buffer.clone();

        let outcome = run(&mut pipeline_with_nyan(), &mut state, &mut buffer, &mut FailingDetector);

        assert_eq!(outcome.applied, Applied::PassedThrough);
        assert_eq!(buffer, before);
        assert_eq!(state.mode(), OverlayMode::Sticker(nyan));
    }

    #[test]
    fn test_landmark_markers_need_no_asset() {
        let mut buffer = Nv12Buffer::filled(W, H, 100, 128);

        run(
            &mut empty_pipeline(),
            &mut sticker_state(sticker_id("landmarks")),
            &mut buffer,
            &mut ReplayDetector::fixed(vec![centered_face()]),
        );

        assert_eq!(buffer.luma[72 * W as usize + 88], 0);
    }

    #[rstest]
    #[case::nyan_at_min("nyan", i32::MIN)]
    #[case::nyan_at_max("nyan", i32::MAX)]
    #[case::santa_at_min("santa", i32::MIN)]
    #[case::santa_at_max("santa", i32::MAX)]
    #[case::ears_at_min("ears", i32::MIN)]
    #[case::markers_at_min("landmarks", i32::MIN)]
    #[case::markers_at_max("landmarks", i32::MAX)]
    fn test_extreme_landmarks_land_off_frame(#[case] sticker: &str, #[case] coord: i32) {
        let mut buffer = Nv12Buffer::filled(W, H, 100, 128);
        let before = buffer.clone();
        let face = face_with(|points| points.fill(LandmarkPoint::new(coord, coord)));

        let outcome = run(
            &mut pipeline_with_every_asset(),
            &mut sticker_state(sticker_id(sticker)),
            &mut buffer,
            &mut ReplayDetector::fixed(vec![face]),
        );

        assert!(matches!(outcome.applied, Applied::Composited { faces: 1, .. }));
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_filter_mode_skips_detection() {
        let mut state = ready_state();
        state.advance_filter();
        let mut buffer = Nv12Buffer::filled(W, H, 100, 90);

        let outcome = run(&mut empty_pipeline(), &mut state, &mut buffer, &mut FailingDetector);

        assert_eq!(outcome.applied, Applied::Filtered { filter: 1 });
        assert!(buffer.chroma.iter().all(|&c| c == 128));
        assert!(buffer.luma.iter().all(|&y| y == 100));
    }

    #[test]
    fn test_mouth_open_requests_capture_once() {
        let open_mouth = face_with(|p| p[LOWER_LIP_BOTTOM] = LandmarkPoint::new(72, 140));
        let mut pipeline = pipeline_with_nyan();
        let mut state = sticker_state(sticker_id("nyan"));
        state.toggle_motion();
        let mut detector = ReplayDetector::fixed(vec![open_mouth]);
        let mut buffer = Nv12Buffer::filled(W, H, 100, 128);

        let first = run(&mut pipeline, &mut state, &mut buffer, &mut detector);
        let second = run(&mut pipeline, &mut state, &mut buffer, &mut detector);

        assert!(first.capture_requested);
        assert!(!second.capture_requested);
    }

    #[test]
    fn test_head_turn_reports_transition() {
        let turned = face_with(|p| p[NOSE_BOTTOM] = LandmarkPoint::new(100, 88));
        let mut detector = ReplayDetector::new(vec![vec![centered_face()], vec![turned]]);
        let config = PipelineConfig {
            gesture_interval: 1,
            ..PipelineConfig::default()
        };
        let mut pipeline = OverlayPipeline::new(AssetStore::default(), &config);
        let mut state = PipelineState::new(ModelReadiness::ready(), &config);
        state.advance_sticker();
        state.toggle_motion();
        let mut buffer = Nv12Buffer::filled(W, H, 100, 128);

        let first = run(&mut pipeline, &mut state, &mut buffer, &mut detector);
        let second = run(&mut pipeline, &mut state, &mut buffer, &mut detector);

        assert!(first.transition.is_none());
        let t = second.transition.unwrap();
        assert_eq!(t.to, OverlayMode::Sticker(2));
        assert_eq!(t.detection, DetectionControl::Unchanged);
        assert_eq!(state.mode(), OverlayMode::Sticker(2));
    }

    #[test]
    fn test_nyan_is_anchored_on_the_nose_tip() {
        let spec = sticker_spec(sticker_id("nyan")).unwrap();
        match spec.overlay {
            StickerOverlay::Sprites { placements, .. } => {
                assert_eq!(placements[0].landmark, NOSE_TIP)
            }
            StickerOverlay::LandmarkMarkers => panic!("nyan draws a sprite"),
        }
    }
}
