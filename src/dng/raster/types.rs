//! Raster data types

use std::fmt;

/// Element type of a raster buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleType {
    U8,
    U16,
    I8,
    I16,
    U32,
    I32,
    F32,
    F64,
}

impl SampleType {
    /// Size of one element in bytes
    pub fn size(self) -> usize {
        match self {
            SampleType::U8 | SampleType::I8 => 1,
            SampleType::U16 | SampleType::I16 => 2,
            SampleType::U32 | SampleType::I32 | SampleType::F32 => 4,
            SampleType::F64 => 8,
        }
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SampleType::U8 => "uint8",
            SampleType::U16 => "uint16",
            SampleType::I8 => "int8",
            SampleType::I16 => "int16",
            SampleType::U32 => "uint32",
            SampleType::I32 => "int32",
            SampleType::F32 => "float32",
            SampleType::F64 => "float64",
        };
        f.write_str(name)
    }
}

/// Width of an encodable sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BytesPerSample {
    One = 1,
    Two = 2,
}

impl BytesPerSample {
    pub fn bytes(self) -> usize {
        self as usize
    }

    pub fn bits(self) -> u16 {
        8 * self as u16
    }
}

/// Borrowed view of a sensor readout.
///
/// `shape` and `strides` are row-major with one entry per dimension; strides
/// are in bytes. 16-bit samples are stored in native byte order.
#[derive(Debug, Clone)]
pub struct Raster<'a> {
    pub data: &'a [u8],
    pub shape: Vec<usize>,
    pub strides: Vec<isize>,
    pub sample_type: SampleType,
}

impl<'a> Raster<'a> {
    pub fn new(data: &'a [u8], shape: Vec<usize>, strides: Vec<isize>, sample_type: SampleType) -> Self {
        Self {
            data,
            shape,
            strides,
            sample_type,
        }
    }

    /// Packed row-major raster of the given element type.
    ///
    /// A shape whose byte extent overflows `isize` gets empty strides, which
    /// [`validate`](crate::dng::raster::validate) reports as too large.
    pub fn packed(data: &'a [u8], shape: Vec<usize>, sample_type: SampleType) -> Self {
        let strides = packed_strides(&shape, sample_type.size()).unwrap_or_default();
        Self::new(data, shape, strides, sample_type)
    }

    /// Packed 8-bit mosaic.
    pub fn mono8(data: &'a [u8], width: usize, height: usize) -> Self {
        Self::packed(data, vec![height, width], SampleType::U8)
    }

    /// Packed 16-bit mosaic, samples in native byte order.
    pub fn mono16(data: &'a [u8], width: usize, height: usize) -> Self {
        Self::packed(data, vec![height, width], SampleType::U16)
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }
}

/// Byte strides of a packed row-major array with the given shape, or `None`
/// when the total extent does not fit in `isize`.
pub fn packed_strides(shape: &[usize], element_size: usize) -> Option<Vec<isize>> {
    let mut strides = vec![0isize; shape.len()];
    let mut stride = isize::try_from(element_size).ok()?;
    for (dim, len) in shape.iter().enumerate().rev() {
        strides[dim] = stride;
        stride = stride.checked_mul(isize::try_from(*len).ok()?)?;
    }
    Some(strides)
}

/// Dimensions of a validated raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterGeometry {
    pub width: u32,
    pub height: u32,
    pub bytes_per_sample: BytesPerSample,
}

impl RasterGeometry {
    /// Bytes in one scanline
    pub fn row_bytes(&self) -> usize {
        self.width as usize * self.bytes_per_sample.bytes()
    }

    pub fn image_bytes(&self) -> usize {
        self.row_bytes() * self.height as usize
    }
}
