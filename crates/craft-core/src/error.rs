use thiserror::Error;

use crate::constants::LANDMARKS_PER_HAND;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CraftError {
    #[error("expected {LANDMARKS_PER_HAND} landmarks per hand, got {0}")]
    LandmarkCount(usize),
    #[error("flat landmark buffer of {0} floats does not hold whole hands")]
    RaggedBuffer(usize),
    #[error("landmark {index} is not finite")]
    NonFinite { index: usize },
    #[error("viewport has no area ({width}x{height})")]
    EmptyViewport { width: f32, height: f32 },
    #[error("landmark detector failed: {0}")]
    Detector(String),
}

pub type Result<T, E = CraftError> = std::result::Result<T, E>;
