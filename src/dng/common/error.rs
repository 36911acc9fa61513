use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of a [`DngError`], so callers can tell bad input
/// apart from resource exhaustion and I/O failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    OutOfMemory,
    Io,
}

#[derive(Error, Debug)]
pub enum DngError {
    #[error("Invalid CFA pattern: {0}")]
    InvalidCfaPattern(u32),

    #[error("Invalid calibration illuminant: {0}")]
    InvalidIlluminant(u16),

    #[error("Camera model must be ASCII without NUL bytes: {0:?}")]
    InvalidCameraModel(String),

    #[error("Invalid color matrix entry at index {index}: {reason}")]
    InvalidColorMatrix { index: usize, reason: String },

    #[error("Raster must be contiguous")]
    NonContiguous,

    #[error("Raster must be 2 dimensional, got {0} dimensions")]
    InvalidDimensionality(usize),

    #[error("Raster must be uint8 or uint16, got {0}")]
    UnsupportedSampleType(String),

    #[error("Raster shape {0:?} is too large to address")]
    ShapeTooLarge(Vec<usize>),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Raster buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("Unable to allocate color matrix")]
    OutOfMemory,

    #[error("Failed to open {} for writing: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write row {row}: {reason}")]
    WriteRow { row: u32, reason: String },

    #[error("TIFF encoder rejected the image: {0}")]
    Format(String),

    #[error("Failed to encode DNG: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DngError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DngError::InvalidCfaPattern(_)
            | DngError::InvalidIlluminant(_)
            | DngError::InvalidCameraModel(_)
            | DngError::InvalidColorMatrix { .. }
            | DngError::NonContiguous
            | DngError::InvalidDimensionality(_)
            | DngError::UnsupportedSampleType(_)
            | DngError::ShapeTooLarge(_)
            | DngError::InvalidDimensions(..)
            | DngError::BufferTooSmall { .. }
            | DngError::Format(_) => ErrorKind::InvalidArgument,
            DngError::OutOfMemory => ErrorKind::OutOfMemory,
            DngError::Open { .. }
            | DngError::WriteRow { .. }
            | DngError::Encode(_)
            | DngError::Io(_) => ErrorKind::Io,
        }
    }
}

impl From<::tiff::TiffError> for DngError {
    fn from(e: ::tiff::TiffError) -> Self {
        match e {
            ::tiff::TiffError::IoError(io) => DngError::Io(io),
            other => DngError::Format(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DngError>;
