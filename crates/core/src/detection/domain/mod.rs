pub mod face_geometry;
pub mod face_landmark_detector;
pub mod face_landmarks;
pub mod landmark_mapper;
