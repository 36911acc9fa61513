use std::io::{Seek, Write};

use ::tiff::encoder::colortype::{ColorType, Gray8, Gray16};
use ::tiff::encoder::{ImageEncoder, TiffEncoder, TiffKind, TiffKindStandard};
use ::tiff::tags::Tag;
use ::tiff::TiffResult;
use tracing::{debug, trace};

use crate::dng::common::error::{DngError, Result};
use crate::dng::raster::types::{BytesPerSample, RasterGeometry};
use crate::dng::tiff::tags::{TagField, TagValue};
use crate::dng::tiff::writer::TagWriter;

enum ImageStream<'a, W: Write + Seek> {
    Depth8(ImageEncoder<'a, W, Gray8, TiffKindStandard>),
    Depth16(ImageEncoder<'a, W, Gray16, TiffKindStandard>),
}

/// [`TagWriter`] backed by the `tiff` crate encoder.
///
/// Owns a single uncompressed image directory with one row per strip.
pub struct StandardTagWriter<'a, W: Write + Seek> {
    image: Option<ImageStream<'a, W>>,
    geometry: RasterGeometry,
    next_row: u32,
}

impl<'a, W: Write + Seek> StandardTagWriter<'a, W> {
    pub fn new(tiff: &'a mut TiffEncoder<W>, geometry: RasterGeometry) -> Result<Self> {
        let (width, height) = (geometry.width, geometry.height);
        let image = match geometry.bytes_per_sample {
            BytesPerSample::One => {
                let mut image = tiff.new_image::<Gray8>(width, height)?;
                image.rows_per_strip(1)?;
                ImageStream::Depth8(image)
            }
            BytesPerSample::Two => {
                let mut image = tiff.new_image::<Gray16>(width, height)?;
                image.rows_per_strip(1)?;
                ImageStream::Depth16(image)
            }
        };

        debug!("Opened image directory: {}x{}", width, height);

        Ok(Self {
            image: Some(image),
            geometry,
            next_row: 0,
        })
    }

    fn image(&mut self) -> Result<&mut ImageStream<'a, W>> {
        self.image
            .as_mut()
            .ok_or_else(|| DngError::Encode("image directory already written".to_string()))
    }
}

impl<W: Write + Seek> TagWriter for StandardTagWriter<'_, W> {
    fn set_field(&mut self, field: &TagField) -> Result<()> {
        trace!("Setting tag {:?} ({} values)", field.tag, field.value.count());
        let result = match self.image()? {
            ImageStream::Depth8(image) => write_field(image, field),
            ImageStream::Depth16(image) => write_field(image, field),
        };
        Ok(result?)
    }

    fn write_scanline(&mut self, row: u32, scanline: &[u8]) -> Result<()> {
        if row != self.next_row {
            return Err(DngError::WriteRow {
                row,
                reason: format!("expected row {}", self.next_row),
            });
        }
        if scanline.len() != self.geometry.row_bytes() {
            return Err(DngError::WriteRow {
                row,
                reason: format!(
                    "scanline is {} bytes, expected {}",
                    scanline.len(),
                    self.geometry.row_bytes()
                ),
            });
        }

        let result = match self.image()? {
            ImageStream::Depth8(image) => image.write_strip(scanline),
            ImageStream::Depth16(image) => {
                let samples: Vec<u16> = scanline
                    .chunks_exact(2)
                    .map(|pair| u16::from_ne_bytes([pair[0], pair[1]]))
                    .collect();
                image.write_strip(&samples)
            }
        };
        result.map_err(|e| DngError::WriteRow {
            row,
            reason: e.to_string(),
        })?;

        self.next_row += 1;
        Ok(())
    }

    fn write_directory(&mut self) -> Result<()> {
        if self.next_row != self.geometry.height {
            return Err(DngError::Encode(format!(
                "{} of {} rows written",
                self.next_row, self.geometry.height
            )));
        }

        let image = self
            .image
            .take()
            .ok_or_else(|| DngError::Encode("image directory already written".to_string()))?;
        let result = match image {
            ImageStream::Depth8(image) => image.finish(),
            ImageStream::Depth16(image) => image.finish(),
        };
        result?;

        debug!("Image directory written");
        Ok(())
    }
}

fn write_field<W, C, K>(image: &mut ImageEncoder<'_, W, C, K>, field: &TagField) -> TiffResult<()>
where
    W: Write + Seek,
    C: ColorType,
    K: TiffKind,
{
    let tag = Tag::from_u16_exhaustive(field.tag.code());
    let encoder = image.encoder();
    match &field.value {
        TagValue::Byte(values) => encoder.write_tag(tag, &values[..]),
        TagValue::Short(values) => encoder.write_tag(tag, &values[..]),
        TagValue::Long(values) => encoder.write_tag(tag, &values[..]),
        TagValue::Ascii(text) => encoder.write_tag(tag, text.as_str()),
        TagValue::SRational(values) => {
            let values: Vec<::tiff::encoder::SRational> = values
                .iter()
                .map(|r| ::tiff::encoder::SRational {
                    n: r.numerator,
                    d: r.denominator,
                })
                .collect();
            encoder.write_tag(tag, &values[..])
        }
    }
}
