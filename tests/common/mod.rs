//! Minimal TIFF directory reader used to inspect files written by the
//! encoder.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::Path;

pub const TAG_IMAGE_WIDTH: u16 = 256;
pub const TAG_IMAGE_LENGTH: u16 = 257;
pub const TAG_BITS_PER_SAMPLE: u16 = 258;
pub const TAG_COMPRESSION: u16 = 259;
pub const TAG_PHOTOMETRIC: u16 = 262;
pub const TAG_STRIP_OFFSETS: u16 = 273;
pub const TAG_ORIENTATION: u16 = 274;
pub const TAG_SAMPLES_PER_PIXEL: u16 = 277;
pub const TAG_ROWS_PER_STRIP: u16 = 278;
pub const TAG_STRIP_BYTE_COUNTS: u16 = 279;
pub const TAG_PLANAR_CONFIGURATION: u16 = 284;
pub const TAG_NEW_SUBFILE_TYPE: u16 = 254;
pub const TAG_CFA_REPEAT_PATTERN_DIM: u16 = 33421;
pub const TAG_CFA_PATTERN: u16 = 33422;
pub const TAG_DNG_VERSION: u16 = 50706;
pub const TAG_DNG_BACKWARD_VERSION: u16 = 50707;
pub const TAG_UNIQUE_CAMERA_MODEL: u16 = 50708;
pub const TAG_COLOR_MATRIX1: u16 = 50721;
pub const TAG_COLOR_MATRIX2: u16 = 50722;
pub const TAG_CALIBRATION_ILLUMINANT1: u16 = 50778;
pub const TAG_CALIBRATION_ILLUMINANT2: u16 = 50779;

pub const TYPE_BYTE: u16 = 1;
pub const TYPE_ASCII: u16 = 2;
pub const TYPE_SHORT: u16 = 3;
pub const TYPE_LONG: u16 = 4;
pub const TYPE_SRATIONAL: u16 = 10;

#[derive(Debug, Clone)]
pub struct Entry {
    pub field_type: u16,
    pub count: u32,
    pub data: Vec<u8>,
}

#[derive(Debug)]
pub struct ParsedTiff {
    pub little_endian: bool,
    pub entries: BTreeMap<u16, Entry>,
    pub next_ifd: u32,
    bytes: Vec<u8>,
}

fn type_size(field_type: u16) -> usize {
    match field_type {
        1 | 2 | 6 | 7 => 1,
        3 | 8 => 2,
        4 | 9 | 11 | 13 => 4,
        5 | 10 | 12 | 16 | 17 | 18 => 8,
        other => panic!("unknown TIFF field type {other}"),
    }
}

impl ParsedTiff {
    pub fn read(path: &Path) -> Self {
        Self::parse(std::fs::read(path).expect("failed to read output"))
    }

    pub fn parse(bytes: Vec<u8>) -> Self {
        let little_endian = match &bytes[..2] {
            b"II" => true,
            b"MM" => false,
            other => panic!("bad byte order mark {other:?}"),
        };
        let mut tiff = ParsedTiff {
            little_endian,
            entries: BTreeMap::new(),
            next_ifd: 0,
            bytes,
        };
        assert_eq!(tiff.u16_at(2), 42, "not a classic TIFF");

        let ifd = tiff.u32_at(4) as usize;
        let count = tiff.u16_at(ifd) as usize;
        let mut previous_tag = None;
        for i in 0..count {
            let at = ifd + 2 + i * 12;
            let tag = tiff.u16_at(at);
            assert!(previous_tag < Some(tag), "IFD entries must be sorted and unique");
            previous_tag = Some(tag);

            let field_type = tiff.u16_at(at + 2);
            let value_count = tiff.u32_at(at + 4);
            let len = type_size(field_type) * value_count as usize;
            let start = if len <= 4 { at + 8 } else { tiff.u32_at(at + 8) as usize };
            let data = tiff.bytes[start..start + len].to_vec();
            tiff.entries.insert(
                tag,
                Entry {
                    field_type,
                    count: value_count,
                    data,
                },
            );
        }
        tiff.next_ifd = tiff.u32_at(ifd + 2 + count * 12);
        tiff
    }

    fn u16_from(&self, b: [u8; 2]) -> u16 {
        if self.little_endian { u16::from_le_bytes(b) } else { u16::from_be_bytes(b) }
    }

    fn u32_from(&self, b: [u8; 4]) -> u32 {
        if self.little_endian { u32::from_le_bytes(b) } else { u32::from_be_bytes(b) }
    }

    fn u16_at(&self, at: usize) -> u16 {
        self.u16_from([self.bytes[at], self.bytes[at + 1]])
    }

    fn u32_at(&self, at: usize) -> u32 {
        self.u32_from(self.bytes[at..at + 4].try_into().unwrap())
    }

    pub fn entry(&self, tag: u16) -> &Entry {
        self.entries
            .get(&tag)
            .unwrap_or_else(|| panic!("tag {tag} missing"))
    }

    pub fn has(&self, tag: u16) -> bool {
        self.entries.contains_key(&tag)
    }

    /// BYTE, SHORT or LONG values widened to u64
    pub fn unsigned(&self, tag: u16) -> Vec<u64> {
        let entry = self.entry(tag);
        match entry.field_type {
            TYPE_BYTE => entry.data.iter().map(|&b| b as u64).collect(),
            TYPE_SHORT => entry
                .data
                .chunks_exact(2)
                .map(|c| self.u16_from([c[0], c[1]]) as u64)
                .collect(),
            TYPE_LONG => entry
                .data
                .chunks_exact(4)
                .map(|c| self.u32_from(c.try_into().unwrap()) as u64)
                .collect(),
            other => panic!("tag {tag} has non-integer type {other}"),
        }
    }

    pub fn ascii(&self, tag: u16) -> String {
        let entry = self.entry(tag);
        assert_eq!(entry.field_type, TYPE_ASCII);
        let text = entry.data.split(|&b| b == 0).next().unwrap_or_default();
        String::from_utf8(text.to_vec()).unwrap()
    }

    pub fn srational(&self, tag: u16) -> Vec<f64> {
        let entry = self.entry(tag);
        assert_eq!(entry.field_type, TYPE_SRATIONAL);
        entry
            .data
            .chunks_exact(8)
            .map(|c| {
                let n = self.u32_from(c[..4].try_into().unwrap()) as i32;
                let d = self.u32_from(c[4..].try_into().unwrap()) as i32;
                n as f64 / d as f64
            })
            .collect()
    }

    /// Raw bytes of every strip, in directory order
    pub fn strips(&self) -> Vec<Vec<u8>> {
        let offsets = self.unsigned(TAG_STRIP_OFFSETS);
        let counts = self.unsigned(TAG_STRIP_BYTE_COUNTS);
        assert_eq!(offsets.len(), counts.len());
        offsets
            .iter()
            .zip(counts.iter())
            .map(|(&offset, &count)| self.bytes[offset as usize..(offset + count) as usize].to_vec())
            .collect()
    }

    pub fn u16_samples(&self, strip: &[u8]) -> Vec<u16> {
        strip.chunks_exact(2).map(|c| self.u16_from([c[0], c[1]])).collect()
    }
}
