use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ::tiff::encoder::TiffEncoder;
use tracing::{debug, info, instrument};

use crate::dng::{
    cfa::{CfaPattern, CFA_REPEAT_PATTERN_DIM},
    color::{ColorMatrix, Illuminant},
    common::error::{DngError, Result},
    raster::{validate, Raster, RasterGeometry},
    tiff::{
        tags::{
            DngTag, TagField, TagValue, DNG_BACKWARD_VERSION, DNG_VERSION, ORIENTATION_TOP_LEFT,
            PHOTOMETRIC_CFA, PLANAR_CONFIG_CONTIGUOUS,
        },
        DngOptions, StandardTagWriter, TagWriter,
    },
};

/// Resolved per-call metadata, owned for the duration of one encode.
#[derive(Debug, Clone, PartialEq)]
pub struct DngMetadata {
    pub camera: String,
    pub cfa_pattern: CfaPattern,
    pub color_matrix1: ColorMatrix,
    pub color_matrix2: Option<ColorMatrix>,
    pub calibration_illuminant1: Option<Illuminant>,
    pub calibration_illuminant2: Option<Illuminant>,
}

impl DngMetadata {
    pub fn resolve(options: &DngOptions) -> Result<Self> {
        Ok(Self {
            camera: camera_model(&options.camera)?,
            cfa_pattern: options.cfa_pattern,
            color_matrix1: ColorMatrix::resolve(options.color_matrix1.as_deref())?,
            color_matrix2: ColorMatrix::resolve_optional(options.color_matrix2.as_deref())?,
            calibration_illuminant1: options.calibration_illuminant1,
            calibration_illuminant2: options.calibration_illuminant2,
        })
    }
}

/// `UniqueCameraModel` is a TIFF ASCII field: 7-bit text, NUL terminated.
fn camera_model(camera: &str) -> Result<String> {
    if !camera.is_ascii() || camera.contains('\0') {
        return Err(DngError::InvalidCameraModel(camera.to_string()));
    }
    Ok(camera.to_string())
}

/// Tags of a single-plane CFA DNG directory, in the order they are set.
pub fn dng_fields(geometry: &RasterGeometry, metadata: &DngMetadata) -> Vec<TagField> {
    use TagValue::{Ascii, Byte, Long, Short};

    let mut fields = vec![
        TagField::new(DngTag::ImageWidth, Long(vec![geometry.width])),
        TagField::new(DngTag::ImageLength, Long(vec![geometry.height])),
        TagField::new(DngTag::UniqueCameraModel, Ascii(metadata.camera.clone())),
        TagField::new(DngTag::Orientation, Short(vec![ORIENTATION_TOP_LEFT])),
        TagField::new(DngTag::PlanarConfiguration, Short(vec![PLANAR_CONFIG_CONTIGUOUS])),
        TagField::new(DngTag::NewSubfileType, Long(vec![0])),
        TagField::new(DngTag::BitsPerSample, Short(vec![geometry.bytes_per_sample.bits()])),
        TagField::new(DngTag::SamplesPerPixel, Short(vec![1])),
        TagField::new(DngTag::PhotometricInterpretation, Short(vec![PHOTOMETRIC_CFA])),
        TagField::new(DngTag::CfaRepeatPatternDim, Short(CFA_REPEAT_PATTERN_DIM.to_vec())),
        TagField::new(DngTag::CfaPattern, Byte(metadata.cfa_pattern.codes().to_vec())),
        TagField::new(DngTag::ColorMatrix1, TagValue::matrix(metadata.color_matrix1.values())),
    ];

    if let Some(matrix) = &metadata.color_matrix2 {
        fields.push(TagField::new(DngTag::ColorMatrix2, TagValue::matrix(matrix.values())));
    }
    if let Some(illuminant) = metadata.calibration_illuminant1 {
        fields.push(TagField::new(DngTag::CalibrationIlluminant1, Short(vec![illuminant.code()])));
    }
    if let Some(illuminant) = metadata.calibration_illuminant2 {
        fields.push(TagField::new(DngTag::CalibrationIlluminant2, Short(vec![illuminant.code()])));
    }

    fields.push(TagField::new(DngTag::DngVersion, Byte(DNG_VERSION.to_vec())));
    fields.push(TagField::new(DngTag::DngBackwardVersion, Byte(DNG_BACKWARD_VERSION.to_vec())));
    fields
}

pub struct RasterToDngPipeline {
    options: DngOptions,
}

impl RasterToDngPipeline {
    pub fn new(options: DngOptions) -> Self {
        Self { options }
    }

    /// Validate the raster and resolve metadata. Runs before any file I/O.
    fn prepare(&self, raster: &Raster) -> Result<(RasterGeometry, DngMetadata)> {
        let geometry = {
            let _span = tracing::info_span!("validate_raster").entered();
            validate(raster)?
        };
        let metadata = {
            let _span = tracing::info_span!("resolve_metadata").entered();
            DngMetadata::resolve(&self.options)?
        };
        Ok((geometry, metadata))
    }

    /// Encode a raster through an arbitrary [`TagWriter`].
    #[instrument(skip_all, fields(input_size = raster.data.len()))]
    pub fn encode<T: TagWriter>(&self, writer: &mut T, raster: &Raster) -> Result<()> {
        let (geometry, metadata) = self.prepare(raster)?;
        write_dng(writer, &geometry, &metadata, raster.data)
    }

    /// Encode a raster into a new DNG file at `path`.
    #[instrument(skip(self, raster, path))]
    pub fn save<P: AsRef<Path>>(&self, raster: &Raster, path: P) -> Result<()> {
        let path = path.as_ref();
        let (geometry, metadata) = self.prepare(raster)?;

        info!(
            output = %path.display(),
            width = geometry.width,
            height = geometry.height,
            bits = geometry.bytes_per_sample.bits(),
            pattern = %metadata.cfa_pattern,
            "Writing DNG"
        );

        let file = {
            let _span = tracing::info_span!("create_output_file").entered();
            File::create(path).map_err(|source| DngError::Open {
                path: path.to_path_buf(),
                source,
            })?
        };
        let mut sink = BufWriter::new(file);

        {
            let mut tiff = TiffEncoder::new(&mut sink)?;
            let mut writer = StandardTagWriter::new(&mut tiff, geometry)?;
            write_dng(&mut writer, &geometry, &metadata, raster.data)?;
        }

        sink.flush()?;

        info!("DNG written");
        Ok(())
    }

    pub fn options(&self) -> &DngOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: DngOptions) {
        self.options = options;
    }
}

/// Set every DNG tag, stream the scanlines top to bottom, then finalize the
/// directory. Stops at the first failure.
pub fn write_dng<T: TagWriter>(
    writer: &mut T,
    geometry: &RasterGeometry,
    metadata: &DngMetadata,
    data: &[u8],
) -> Result<()> {
    {
        let _span = tracing::info_span!("write_tags").entered();
        for field in dng_fields(geometry, metadata) {
            writer.set_field(&field)?;
        }
    }

    {
        let _span = tracing::info_span!("write_scanlines", rows = geometry.height).entered();
        let image = data.get(..geometry.image_bytes()).ok_or(DngError::BufferTooSmall {
            needed: geometry.image_bytes(),
            actual: data.len(),
        })?;
        for (row, scanline) in (0..geometry.height).zip(image.chunks_exact(geometry.row_bytes())) {
            writer.write_scanline(row, scanline).map_err(|e| match e {
                DngError::WriteRow { .. } => e,
                other => DngError::WriteRow {
                    row,
                    reason: other.to_string(),
                },
            })?;
        }
        debug!("Wrote {} scanlines", geometry.height);
    }

    {
        let _span = tracing::info_span!("write_directory").entered();
        writer.write_directory()?;
    }

    Ok(())
}

/// Save a 2-D `u8`/`u16` Bayer mosaic as a single-image DNG.
pub fn save_dng<P: AsRef<Path>>(raster: &Raster, path: P, options: &DngOptions) -> Result<()> {
    RasterToDngPipeline::new(options.clone()).save(raster, path)
}
