// Vidmark Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VidmarkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input video not found: {0}")]
    MissingInput(String),

    #[error("Watermark image not found: {0}")]
    MissingWatermark(String),

    #[error("FFmpeg not found: {0}")]
    FFmpegNotFound(String),

    #[error("FFmpeg error: {0}")]
    FFmpeg(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

pub type Result<T> = std::result::Result<T, VidmarkError>;
