//! SpiMem error file

use thiserror::Error;

/// Possible errors while using library
#[derive(Error, Debug, PartialEq)]
pub enum SpiMemError {
    #[error("ID reply too short: {0} bytes, expected 3")]
    ShortIdReply(usize),
    #[error("No chip detected")]
    NoChipDetected,
    #[error("Invalid chip ID: {0}")]
    InvalidId(String),
}
