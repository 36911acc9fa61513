//! Pipeline conversions module
//!
//! Orchestrates validation, metadata resolution and tag writing for a
//! raster-to-DNG encode.

mod raster_to_dng;


pub use raster_to_dng::{dng_fields, save_dng, write_dng, DngMetadata, RasterToDngPipeline};
