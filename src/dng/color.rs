//! Color calibration metadata

pub mod illuminant;
pub mod matrix;

pub use illuminant::Illuminant;
pub use matrix::{ColorMatrix, MatrixValue, DEFAULT_COLOR_MATRIX1};
