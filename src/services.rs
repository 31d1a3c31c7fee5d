pub mod distance_service;
pub mod landmark_service;
