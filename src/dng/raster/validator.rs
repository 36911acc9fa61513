use tracing::debug;

use crate::dng::common::error::{DngError, Result};
use crate::dng::raster::types::{BytesPerSample, Raster, RasterGeometry, SampleType, packed_strides};

/// Check that a raster can be streamed as DNG scanlines.
///
/// Rejects non-contiguous buffers, anything that is not 2-D, and sample types
/// other than `u8`/`u16`. Returns the geometry the encoder needs.
pub fn validate(raster: &Raster) -> Result<RasterGeometry> {
    let expected = packed_strides(&raster.shape, raster.sample_type.size())
        .ok_or_else(|| DngError::ShapeTooLarge(raster.shape.clone()))?;
    if !is_contiguous(raster, &expected) {
        return Err(DngError::NonContiguous);
    }

    if raster.ndim() != 2 {
        return Err(DngError::InvalidDimensionality(raster.ndim()));
    }

    let bytes_per_sample = match raster.sample_type {
        SampleType::U8 => BytesPerSample::One,
        SampleType::U16 => BytesPerSample::Two,
        other => return Err(DngError::UnsupportedSampleType(other.to_string())),
    };

    let (height, width) = (raster.shape[0], raster.shape[1]);
    if width == 0 || height == 0 {
        return Err(DngError::InvalidDimensions(width, height));
    }
    let (Ok(width32), Ok(height32)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(DngError::InvalidDimensions(width, height));
    };

    let needed = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(bytes_per_sample.bytes()))
        .ok_or(DngError::InvalidDimensions(width, height))?;
    if raster.data.len() < needed {
        return Err(DngError::BufferTooSmall {
            needed,
            actual: raster.data.len(),
        });
    }

    debug!("Validated raster: {}x{} {}", width, height, raster.sample_type);

    Ok(RasterGeometry {
        width: width32,
        height: height32,
        bytes_per_sample,
    })
}

fn is_contiguous(raster: &Raster, expected: &[isize]) -> bool {
    if raster.strides.len() != raster.shape.len() {
        return false;
    }
    raster
        .shape
        .iter()
        .zip(raster.strides.iter().zip(expected.iter()))
        .all(|(&len, (&stride, &packed))| len <= 1 || stride == packed)
}
