//! Raster validation module
//!
//! Describes the in-memory sensor buffer handed to the writer and checks it
//! can be streamed as DNG scanlines.

mod validator;
pub mod types;

pub use types::{BytesPerSample, Raster, RasterGeometry, SampleType};
pub use validator::validate;
