//! Bayer raster to DNG writer
//!
//! This module turns a single-channel 8- or 16-bit sensor mosaic into a
//! single-image DNG file, with separate modules for raster validation, CFA
//! and color metadata, TIFF tag writing, and encode orchestration.

pub mod cfa;
pub mod color;
pub mod common;
pub mod conversions;
pub mod raster;
pub mod tiff;

pub use common::{DngError, ErrorKind, Result};

pub use cfa::{CfaColor, CfaPattern, CFA_BGGR, CFA_GBRG, CFA_GRBG, CFA_RGGB};

pub use color::{
    illuminant::*,
    ColorMatrix,
    MatrixValue,
    DEFAULT_COLOR_MATRIX1,
};

pub use raster::{
    validate,
    BytesPerSample,
    Raster,
    RasterGeometry,
    SampleType,
};

pub use tiff::{
    DngOptions,
    DngOptionsBuilder,
    StandardTagWriter,
    TagWriter,
};

pub use conversions::{save_dng, RasterToDngPipeline};
