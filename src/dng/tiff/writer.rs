use crate::dng::common::error::Result;
use crate::dng::tiff::tags::TagField;

/// Low-level TIFF directory writer the DNG encoder drives.
pub trait TagWriter {
    fn set_field(&mut self, field: &TagField) -> Result<()>;
    fn write_scanline(&mut self, row: u32, scanline: &[u8]) -> Result<()>;
    fn write_directory(&mut self) -> Result<()>;
}
