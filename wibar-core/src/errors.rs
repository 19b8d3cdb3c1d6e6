use crate::models::{BarId, ScreenId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WibarError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WibarError {
    #[error("Invalid position {0:?}, expected one of top, bottom, left or right")]
    InvalidPosition(String),
    #[error("Invalid size {0:?}, expected a pixel value or a percentage such as \"40%\"")]
    InvalidSize(String),
    #[error("Unknown {0}")]
    UnknownBar(BarId),
    #[error("Unknown {0}")]
    UnknownScreen(ScreenId),
    #[error("No screen available to place the bar on")]
    NoScreen,
}
