mod detections;
mod preview;
mod settings;

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use selfcam_core::assets::domain::asset_store::AssetStore;
use selfcam_core::assets::infrastructure::asset_loader::spawn_asset_load;
use selfcam_core::assets::infrastructure::image_sprite_decoder::ImageSpriteDecoder;
use selfcam_core::detection::domain::face_geometry::FaceGeometry;
use selfcam_core::detection::infrastructure::cadence_detector::CadenceDetector;
use selfcam_core::detection::infrastructure::replay_detector::ReplayDetector;
use selfcam_core::pipeline::infrastructure::model_loader::spawn_model_load;
use selfcam_core::pipeline::overlay_pipeline::{Applied, OverlayPipeline};
use selfcam_core::pipeline::pipeline_config::PipelineConfig;
use selfcam_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use selfcam_core::pipeline::pipeline_state::PipelineState;
use selfcam_core::pipeline::readiness::ModelReadiness;
use selfcam_core::shared::frame::{Nv12Buffer, PixelFormat};

use settings::Settings;

/// Applies stickers or color filters to a raw NV12 preview frame.
#[derive(Parser)]
#[command(name = "selfcam")]
struct Cli {
    /// Raw NV12 frame (luma plane followed by interleaved chroma).
    #[arg(long)]
    input: PathBuf,

    /// Frame width in pixels (even).
    #[arg(long)]
    width: u32,

    /// Frame height in pixels (even).
    #[arg(long)]
    height: u32,

    /// Where to write the processed NV12 frame.
    #[arg(long)]
    output: PathBuf,

    /// Also write an RGB PNG preview here.
    #[arg(long)]
    png: Option<PathBuf>,

    /// Directory holding the sticker images.
    #[arg(long)]
    stickers: Option<PathBuf>,

    /// JSON file with detected faces and landmarks.
    #[arg(long)]
    detections: Option<PathBuf>,

    /// Press the sticker button this many times.
    #[arg(long, default_value = "0")]
    sticker: usize,

    /// Press the filter button this many times.
    #[arg(long, default_value = "0")]
    filter: usize,

    /// Turn on gesture-driven sticker switching and capture.
    #[arg(long)]
    motion: bool,

    /// Number of preview frames to run.
    #[arg(long, default_value = "1")]
    frames: usize,

    /// Pixel format tag the frame is delivered with.
    #[arg(long, default_value = "nv12")]
    format: String,

    /// JSON file overriding pipeline settings.
    #[arg(long)]
    settings: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;
    let format = parse_format(&cli.format)?;

    let config = match &cli.settings {
        Some(path) => Settings::load(path)?.into_config(),
        None => PipelineConfig::default(),
    };

    let data = fs::read(&cli.input)
        .map_err(|e| format!("Cannot read frame {}: {e}", cli.input.display()))?;
    let source = Nv12Buffer::from_bytes(&data, cli.width, cli.height)?;

    let asset_rx = cli
        .stickers
        .clone()
        .map(|dir| spawn_asset_load(dir, Box::new(ImageSpriteDecoder::new())));

    // Detection results stand in for the landmark model: stickers stay
    // locked until they have loaded.
    let readiness = ModelReadiness::new();
    let faces = match cli.detections.clone() {
        Some(path) => {
            let height = cli.height;
            let rx = spawn_model_load(readiness.clone(), move || {
                detections::load(&path, height).map_err(|e| e.to_string().into())
            });
            rx.recv()
                .map_err(|_| "Detections could not be loaded; see log for details")?
        }
        None => Vec::new(),
    };

    let assets = match asset_rx {
        Some(rx) => rx.recv()?,
        None => AssetStore::default(),
    };

    let mut state = PipelineState::new(readiness, &config);
    press_buttons(&cli, &mut state);

    let mut pipeline = OverlayPipeline::new(assets, &config)
        .with_logger(Box::new(StdoutPipelineLogger::default()));
    let result = run_frames(&mut pipeline, &mut state, &source, format, faces, cli.frames, &config)?;

    fs::write(&cli.output, result.to_bytes())?;
    log::info!("Output written to {}", cli.output.display());
    if let Some(png) = &cli.png {
        preview::save_png(&result, png)?;
        log::info!("Preview written to {}", png.display());
    }
    pipeline.logger_mut().summary();
    Ok(())
}

fn press_buttons(cli: &Cli, state: &mut PipelineState) {
    for _ in 0..cli.filter {
        state.advance_filter();
    }
    for _ in 0..cli.sticker {
        let transition = state.advance_sticker();
        log::debug!("Sticker button: {:?}", transition.detection);
    }
    if cli.motion {
        state.toggle_motion();
    }
}

/// Feeds `frames` copies of `source` through the pipeline, as a camera
/// holding still would, and returns the last processed frame.
fn run_frames(
    pipeline: &mut OverlayPipeline,
    state: &mut PipelineState,
    source: &Nv12Buffer,
    format: PixelFormat,
    faces: Vec<FaceGeometry>,
    frames: usize,
    config: &PipelineConfig,
) -> Result<Nv12Buffer, Box<dyn std::error::Error>> {
    let mut detector = CadenceDetector::new(
        Box::new(ReplayDetector::fixed(faces)),
        config.detection_interval,
    )?;
    let mut result = source.clone();

    for index in 0..frames {
        result.luma.copy_from_slice(&source.luma);
        result.chroma.copy_from_slice(&source.chroma);
        let mut frame = result.as_frame()?;
        let outcome = pipeline.process(state, &mut frame, format, &mut detector);

        if let Some(transition) = outcome.transition {
            log::info!(
                "Frame {index}: gesture switched {:?} -> {:?} (detection {:?})",
                transition.from,
                transition.to,
                transition.detection
            );
        }
        if outcome.capture_requested {
            log::info!("Frame {index}: capture requested");
        }
        if outcome.applied == Applied::Rejected {
            return Err(format!("Frame format {format:?} is not supported").into());
        }
        pipeline.logger_mut().progress(index + 1, frames);
    }
    Ok(result)
}

fn parse_format(name: &str) -> Result<PixelFormat, Box<dyn std::error::Error>> {
    let format = match name.to_lowercase().as_str() {
        "nv12" => PixelFormat::Nv12,
        "nv21" => PixelFormat::Nv21,
        "i420" => PixelFormat::I420,
        "yv12" => PixelFormat::Yv12,
        "yuyv" => PixelFormat::Yuyv,
        "uyvy" => PixelFormat::Uyvy,
        "rgb565" => PixelFormat::Rgb565,
        "rgb888" => PixelFormat::Rgb888,
        "rgba8888" => PixelFormat::Rgba8888,
        other => return Err(format!("Unknown pixel format '{other}'").into()),
    };
    Ok(format)
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if cli.width == 0 || cli.height == 0 || cli.width % 2 != 0 || cli.height % 2 != 0 {
        return Err(format!(
            "Frame dimensions must be even and non-zero, got {}x{}",
            cli.width, cli.height
        )
        .into());
    }
    if cli.sticker > 0 && cli.filter > 0 {
        return Err("--sticker and --filter are mutually exclusive".into());
    }
    if cli.frames == 0 {
        return Err("--frames must be at least 1".into());
    }
    if cli.sticker > 0 && cli.detections.is_none() {
        log::warn!("No --detections given: sticker requests will be ignored");
    }
    Ok(())
}
