use std::fs;
use std::path::Path;

use serde::Deserialize;

use selfcam_core::detection::domain::face_geometry::{FaceGeometry, FaceRect};
use selfcam_core::detection::domain::face_landmarks::{FaceLandmarks, LandmarkPoint};

/// A face box either already in detector convention or as the camera
/// reports it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RectDto {
    Frame {
        top: i32,
        bottom: i32,
        left: i32,
        right: i32,
    },
    Sensor {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

#[derive(Debug, Deserialize)]
struct FaceDto {
    rect: RectDto,
    #[serde(default)]
    landmarks: Option<Vec<[i32; 2]>>,
}

/// Parses a JSON list of faces. Sensor boxes are converted against
/// `frame_height`.
pub fn parse(json: &str, frame_height: u32) -> Result<Vec<FaceGeometry>, Box<dyn std::error::Error>> {
    let faces: Vec<FaceDto> = serde_json::from_str(json)?;
    faces
        .into_iter()
        .map(|face| -> Result<FaceGeometry, Box<dyn std::error::Error>> {
            let rect = match face.rect {
                RectDto::Frame {
                    top,
                    bottom,
                    left,
                    right,
                } => FaceRect::new(top, bottom, left, right),
                RectDto::Sensor {
                    x,
                    y,
                    width,
                    height,
                } => FaceRect::from_sensor(x, y, width, height, frame_height as i32),
            };
            let landmarks = match face.landmarks {
                Some(points) => {
                    let points: Vec<LandmarkPoint> =
                        points.iter().map(|&[x, y]| LandmarkPoint::new(x, y)).collect();
                    Some(FaceLandmarks::from_points(&points)?)
                }
                None => None,
            };
            Ok(FaceGeometry::new(rect, landmarks))
        })
        .collect()
}

pub fn load(path: &Path, frame_height: u32) -> Result<Vec<FaceGeometry>, Box<dyn std::error::Error>> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read detections {}: {e}", path.display()))?;
    parse(&json, frame_height)
}
