//! TIFF/DNG tags written by the encoder and their value encodings.

/// Denominator used when storing color matrices as SRATIONAL.
pub const MATRIX_DENOMINATOR: i32 = 10_000;

pub const PHOTOMETRIC_CFA: u16 = 32803;
pub const ORIENTATION_TOP_LEFT: u16 = 1;
pub const PLANAR_CONFIG_CONTIGUOUS: u16 = 1;

/// DNG 1.1.0.0
pub const DNG_VERSION: [u8; 4] = [1, 1, 0, 0];
/// Oldest reader version able to parse the output.
pub const DNG_BACKWARD_VERSION: [u8; 4] = [1, 0, 0, 0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DngTag {
    NewSubfileType,
    ImageWidth,
    ImageLength,
    BitsPerSample,
    PhotometricInterpretation,
    Orientation,
    SamplesPerPixel,
    PlanarConfiguration,
    CfaRepeatPatternDim,
    CfaPattern,
    DngVersion,
    DngBackwardVersion,
    UniqueCameraModel,
    ColorMatrix1,
    ColorMatrix2,
    CalibrationIlluminant1,
    CalibrationIlluminant2,
}

impl DngTag {
    pub fn code(self) -> u16 {
        match self {
            DngTag::NewSubfileType => 254,
            DngTag::ImageWidth => 256,
            DngTag::ImageLength => 257,
            DngTag::BitsPerSample => 258,
            DngTag::PhotometricInterpretation => 262,
            DngTag::Orientation => 274,
            DngTag::SamplesPerPixel => 277,
            DngTag::PlanarConfiguration => 284,
            DngTag::CfaRepeatPatternDim => 33421,
            DngTag::CfaPattern => 33422,
            DngTag::DngVersion => 50706,
            DngTag::DngBackwardVersion => 50707,
            DngTag::UniqueCameraModel => 50708,
            DngTag::ColorMatrix1 => 50721,
            DngTag::ColorMatrix2 => 50722,
            DngTag::CalibrationIlluminant1 => 50778,
            DngTag::CalibrationIlluminant2 => 50779,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SRational {
    pub numerator: i32,
    pub denominator: i32,
}

impl SRational {
    pub fn from_f32(value: f32, denominator: i32) -> Self {
        Self {
            numerator: (value * denominator as f32).round() as i32,
            denominator,
        }
    }

    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

/// A tag payload in the TIFF field type the DNG specification requires.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Byte(Vec<u8>),
    Short(Vec<u16>),
    Long(Vec<u32>),
    Ascii(String),
    SRational(Vec<SRational>),
}

impl TagValue {
    pub fn matrix(values: &[f32]) -> Self {
        TagValue::SRational(
            values
                .iter()
                .map(|&v| SRational::from_f32(v, MATRIX_DENOMINATOR))
                .collect(),
        )
    }

    /// Number of TIFF elements in the field
    pub fn count(&self) -> usize {
        match self {
            TagValue::Byte(v) => v.len(),
            TagValue::Short(v) => v.len(),
            TagValue::Long(v) => v.len(),
            // includes the NUL terminator
            TagValue::Ascii(s) => s.len() + 1,
            TagValue::SRational(v) => v.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagField {
    pub tag: DngTag,
    pub value: TagValue,
}

impl TagField {
    pub fn new(tag: DngTag, value: TagValue) -> Self {
        Self { tag, value }
    }
}
