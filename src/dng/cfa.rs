//! Bayer color filter array patterns
//!
//! Maps each supported 2x2 Bayer arrangement to the color sequence written
//! into the `CFAPattern` tag.

use std::fmt;
use std::str::FromStr;

use crate::dng::common::error::{DngError, Result};

pub const CFA_BGGR: u32 = 0;
pub const CFA_GBRG: u32 = 1;
pub const CFA_GRBG: u32 = 2;
pub const CFA_RGGB: u32 = 3;

/// Width and height of the repeating CFA tile.
pub const CFA_REPEAT_PATTERN_DIM: [u16; 2] = [2, 2];

/// TIFF/EP color codes used in `CFAPattern`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CfaColor {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl CfaColor {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Bayer layouts, named by the 2x2 tile read left-to-right, top-to-bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CfaPattern {
    Bggr,
    Gbrg,
    Grbg,
    #[default]
    Rggb,
}

use CfaColor::{Blue, Green, Red};

const CFA_CELLS: [[CfaColor; 4]; 4] = [
    [Blue, Green, Green, Red],
    [Green, Blue, Red, Green],
    [Green, Red, Blue, Green],
    [Red, Green, Green, Blue],
];

impl CfaPattern {
    pub fn from_id(id: u32) -> Result<Self> {
        match id {
            CFA_BGGR => Ok(CfaPattern::Bggr),
            CFA_GBRG => Ok(CfaPattern::Gbrg),
            CFA_GRBG => Ok(CfaPattern::Grbg),
            CFA_RGGB => Ok(CfaPattern::Rggb),
            other => Err(DngError::InvalidCfaPattern(other)),
        }
    }

    pub fn id(self) -> u32 {
        match self {
            CfaPattern::Bggr => CFA_BGGR,
            CfaPattern::Gbrg => CFA_GBRG,
            CfaPattern::Grbg => CFA_GRBG,
            CfaPattern::Rggb => CFA_RGGB,
        }
    }

    /// Colors of the top-left, top-right, bottom-left and bottom-right cells.
    pub fn cells(self) -> [CfaColor; 4] {
        CFA_CELLS[self.id() as usize]
    }

    /// The `CFAPattern` tag payload.
    pub fn codes(self) -> [u8; 4] {
        self.cells().map(CfaColor::code)
    }
}

impl TryFrom<u32> for CfaPattern {
    type Error = DngError;

    fn try_from(id: u32) -> Result<Self> {
        CfaPattern::from_id(id)
    }
}

impl FromStr for CfaPattern {
    type Err = DngError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "BGGR" => Ok(CfaPattern::Bggr),
            "GBRG" => Ok(CfaPattern::Gbrg),
            "GRBG" => Ok(CfaPattern::Grbg),
            "RGGB" => Ok(CfaPattern::Rggb),
            _ => match s.parse::<u32>() {
                Ok(id) => CfaPattern::from_id(id),
                Err(_) => Err(DngError::InvalidCfaPattern(u32::MAX)),
            },
        }
    }
}

impl fmt::Display for CfaPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CfaPattern::Bggr => "BGGR",
            CfaPattern::Gbrg => "GBRG",
            CfaPattern::Grbg => "GRBG",
            CfaPattern::Rggb => "RGGB",
        };
        f.write_str(name)
    }
}
