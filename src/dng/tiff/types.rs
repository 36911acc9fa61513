//! DNG writer configuration types

use crate::dng::cfa::CfaPattern;
use crate::dng::color::Illuminant;

pub const DEFAULT_CAMERA_MODEL: &str = "Unknown";

/// Metadata written alongside the mosaic
#[derive(Debug, Clone, PartialEq)]
pub struct DngOptions {
    /// Written verbatim to `UniqueCameraModel`
    pub camera: String,
    /// Bayer layout of the sensor
    pub cfa_pattern: CfaPattern,
    /// `ColorMatrix1` entries; the built-in default is used when `None`
    pub color_matrix1: Option<Vec<f32>>,
    /// `ColorMatrix2` entries; omitted when `None`
    pub color_matrix2: Option<Vec<f32>>,
    pub calibration_illuminant1: Option<Illuminant>,
    pub calibration_illuminant2: Option<Illuminant>,
}

impl Default for DngOptions {
    fn default() -> Self {
        Self {
            camera: DEFAULT_CAMERA_MODEL.to_string(),
            cfa_pattern: CfaPattern::Rggb,
            color_matrix1: None,
            color_matrix2: None,
            calibration_illuminant1: None,
            calibration_illuminant2: None,
        }
    }
}

impl DngOptions {
    pub fn builder() -> DngOptionsBuilder {
        DngOptionsBuilder::default()
    }
}

/// Builder for DngOptions
#[derive(Default)]
pub struct DngOptionsBuilder {
    camera: Option<String>,
    cfa_pattern: Option<CfaPattern>,
    color_matrix1: Option<Vec<f32>>,
    color_matrix2: Option<Vec<f32>>,
    calibration_illuminant1: Option<Illuminant>,
    calibration_illuminant2: Option<Illuminant>,
}

impl DngOptionsBuilder {
    pub fn camera(mut self, camera: impl Into<String>) -> Self {
        self.camera = Some(camera.into());
        self
    }

    pub fn cfa_pattern(mut self, pattern: CfaPattern) -> Self {
        self.cfa_pattern = Some(pattern);
        self
    }

    pub fn color_matrix1(mut self, matrix: impl Into<Vec<f32>>) -> Self {
        self.color_matrix1 = Some(matrix.into());
        self
    }

    pub fn color_matrix2(mut self, matrix: impl Into<Vec<f32>>) -> Self {
        self.color_matrix2 = Some(matrix.into());
        self
    }

    pub fn calibration_illuminant1(mut self, illuminant: Illuminant) -> Self {
        self.calibration_illuminant1 = Some(illuminant);
        self
    }

    pub fn calibration_illuminant2(mut self, illuminant: Illuminant) -> Self {
        self.calibration_illuminant2 = Some(illuminant);
        self
    }

    pub fn build(self) -> DngOptions {
        let default = DngOptions::default();
        DngOptions {
            camera: self.camera.unwrap_or(default.camera),
            cfa_pattern: self.cfa_pattern.unwrap_or(default.cfa_pattern),
            color_matrix1: self.color_matrix1.or(default.color_matrix1),
            color_matrix2: self.color_matrix2.or(default.color_matrix2),
            calibration_illuminant1: self.calibration_illuminant1.or(default.calibration_illuminant1),
            calibration_illuminant2: self.calibration_illuminant2.or(default.calibration_illuminant2),
        }
    }
}
