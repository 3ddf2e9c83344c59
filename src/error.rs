use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for the fdm-plot library
#[derive(Error, Debug)]
pub enum SurfaceError {

    #[error("Input file '{}' not found or unreadable; expected a three-column (spot, maturity, price) table there (set FDM_PLOT_INPUT to read a different file)", .0.display())]
    MissingInput(PathBuf),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Grid error: {0}")]
    GridError(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, SurfaceError>;
