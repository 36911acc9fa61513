//! Color matrix resolution for the `ColorMatrix1`/`ColorMatrix2` tags.

use tracing::debug;

use crate::dng::common::error::{DngError, Result};
use crate::dng::tiff::tags::MATRIX_DENOMINATOR;

/// Largest magnitude that survives SRATIONAL encoding without clamping.
pub const MAX_MATRIX_ENTRY: f32 = (i32::MAX / MATRIX_DENOMINATOR) as f32;

/// XYZ(D50) to camera transform used when the caller supplies no
/// `ColorMatrix1`, row-major 3x3.
#[rustfmt::skip]
pub const DEFAULT_COLOR_MATRIX1: [f32; 9] = [
     2.005, -0.771, -0.269,
    -0.752,  1.688,  0.064,
    -0.149,  0.283,  0.745,
];

/// A value that may be converted into a color matrix entry.
pub trait MatrixValue {
    fn to_matrix_entry(&self) -> std::result::Result<f32, String>;
}

macro_rules! impl_numeric_matrix_value {
    ($($ty:ty),*) => {
        $(
            impl MatrixValue for $ty {
                fn to_matrix_entry(&self) -> std::result::Result<f32, String> {
                    Ok(*self as f32)
                }
            }
        )*
    };
}

impl_numeric_matrix_value!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

impl MatrixValue for str {
    fn to_matrix_entry(&self) -> std::result::Result<f32, String> {
        self.trim()
            .parse::<f32>()
            .map_err(|e| format!("{:?} is not a number ({})", self, e))
    }
}

impl MatrixValue for String {
    fn to_matrix_entry(&self) -> std::result::Result<f32, String> {
        self.as_str().to_matrix_entry()
    }
}

impl<T: MatrixValue + ?Sized> MatrixValue for &T {
    fn to_matrix_entry(&self) -> std::result::Result<f32, String> {
        (**self).to_matrix_entry()
    }
}

/// An owned, resolved color matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMatrix {
    values: Vec<f32>,
}

impl ColorMatrix {
    /// Resolve caller input into a matrix.
    ///
    /// With no input this is a copy of [`DEFAULT_COLOR_MATRIX1`]. Otherwise
    /// every entry is converted to `f32`; the first entry that cannot be
    /// converted fails the whole call.
    pub fn resolve<T: MatrixValue>(input: Option<&[T]>) -> Result<Self> {
        let Some(input) = input else {
            return Self::from_f32(&DEFAULT_COLOR_MATRIX1);
        };

        let mut values = Vec::new();
        values
            .try_reserve_exact(input.len())
            .map_err(|_| DngError::OutOfMemory)?;

        for (index, item) in input.iter().enumerate() {
            let value = item
                .to_matrix_entry()
                .and_then(check_range)
                .map_err(|reason| DngError::InvalidColorMatrix { index, reason })?;
            values.push(value);
        }

        debug!("Resolved color matrix with {} entries", values.len());
        Ok(Self { values })
    }

    /// Resolve an optional matrix that has no default.
    pub fn resolve_optional<T: MatrixValue>(input: Option<&[T]>) -> Result<Option<Self>> {
        input.map(|values| Self::resolve(Some(values))).transpose()
    }

    fn from_f32(values: &[f32]) -> Result<Self> {
        let mut owned = Vec::new();
        owned
            .try_reserve_exact(values.len())
            .map_err(|_| DngError::OutOfMemory)?;
        owned.extend_from_slice(values);
        Ok(Self { values: owned })
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<f32> {
        self.values
    }
}

fn check_range(value: f32) -> std::result::Result<f32, String> {
    if !value.is_finite() {
        return Err(format!("{} is not finite", value));
    }
    if value.abs() > MAX_MATRIX_ENTRY {
        return Err(format!("{} exceeds +/-{}", value, MAX_MATRIX_ENTRY));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dng::common::error::ErrorKind;

    #[test]
    fn test_default_matrix() {
        let matrix = ColorMatrix::resolve::<f32>(None).unwrap();
        assert_eq!(matrix.len(), 9);
        assert_eq!(matrix.values(), &DEFAULT_COLOR_MATRIX1);
        assert_eq!(matrix.values()[0].to_bits(), 2.005f32.to_bits());
        assert_eq!(matrix.values()[8].to_bits(), 0.745f32.to_bits());
    }

    #[test]
    fn test_integer_input() {
        let matrix = ColorMatrix::resolve(Some(&[1, 2, 3][..])).unwrap();
        assert_eq!(matrix.values(), &[1.0, 2.0, 3.0]);
        assert_eq!(matrix.len(), 3);
    }

    #[test]
    fn test_float_input_is_narrowed() {
        let matrix = ColorMatrix::resolve(Some(&[0.1f64, -2.5][..])).unwrap();
        assert_eq!(matrix.values(), &[0.1f32, -2.5f32]);
    }

    #[test]
    fn test_text_input() {
        let matrix = ColorMatrix::resolve(Some(&["1", " -0.5 ", "2e1"][..])).unwrap();
        assert_eq!(matrix.values(), &[1.0, -0.5, 20.0]);
    }

    #[test]
    fn test_non_numeric_entry() {
        let err = ColorMatrix::resolve(Some(&["x"][..])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(matches!(err, DngError::InvalidColorMatrix { index: 0, .. }));
    }

    #[test]
    fn test_failure_reports_first_bad_index() {
        let input = vec!["1.0".to_string(), "2.0".to_string(), "true".to_string()];
        let err = ColorMatrix::resolve(Some(&input[..])).unwrap_err();
        assert!(matches!(err, DngError::InvalidColorMatrix { index: 2, .. }));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = ColorMatrix::resolve(Some(&[1.0f32, f32::NAN][..])).unwrap_err();
        assert!(matches!(err, DngError::InvalidColorMatrix { index: 1, .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        for text in ["NaN", "inf", "-inf"] {
            let err = ColorMatrix::resolve(Some(&["0.5", text][..])).unwrap_err();
            assert!(matches!(err, DngError::InvalidColorMatrix { index: 1, .. }));
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = ColorMatrix::resolve(Some(&[0.0f64, 0.0, 1.0e6][..])).unwrap_err();
        assert!(matches!(err, DngError::InvalidColorMatrix { index: 2, .. }));

        let err = ColorMatrix::resolve(Some(&[-1.0e6f32][..])).unwrap_err();
        assert!(matches!(err, DngError::InvalidColorMatrix { index: 0, .. }));
    }

    #[test]
    fn test_range_limit_accepted() {
        let matrix = ColorMatrix::resolve(Some(&[MAX_MATRIX_ENTRY, -MAX_MATRIX_ENTRY][..])).unwrap();
        assert_eq!(matrix.values(), &[214748.0, -214748.0]);
    }

    #[test]
    fn test_empty_input() {
        let matrix = ColorMatrix::resolve::<f32>(Some(&[][..])).unwrap();
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_optional_has_no_default() {
        assert!(ColorMatrix::resolve_optional::<f32>(None).unwrap().is_none());
        let identity = [1.0f32, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        let matrix = ColorMatrix::resolve_optional(Some(&identity[..])).unwrap().unwrap();
        assert_eq!(matrix.into_values(), identity.to_vec());
    }
}
