//! EXIF LightSource codes for the `CalibrationIlluminant1/2` tags.

use crate::dng::common::error::{DngError, Result};

pub const ILLUMINANT_UNKNOWN: u16 = 0;
pub const ILLUMINANT_DAYLIGHT: u16 = 1;
pub const ILLUMINANT_FLUORESCENT: u16 = 2;
pub const ILLUMINANT_TUNGSTEN: u16 = 3;
pub const ILLUMINANT_FLASH: u16 = 4;
pub const ILLUMINANT_FINE_WEATHER: u16 = 9;
pub const ILLUMINANT_CLOUDY_WEATHER: u16 = 10;
pub const ILLUMINANT_SHADE: u16 = 11;
pub const ILLUMINANT_DAYLIGHT_FLUORESCENT: u16 = 12;
pub const ILLUMINANT_DAY_WHITE_FLUORESCENT: u16 = 13;
pub const ILLUMINANT_COOL_WHITE_FLUORESCENT: u16 = 14;
pub const ILLUMINANT_WHITE_FLUORESCENT: u16 = 15;
pub const ILLUMINANT_STANDARD_LIGHT_A: u16 = 17;
pub const ILLUMINANT_STANDARD_LIGHT_B: u16 = 18;
pub const ILLUMINANT_STANDARD_LIGHT_C: u16 = 19;
pub const ILLUMINANT_D55: u16 = 20;
pub const ILLUMINANT_D65: u16 = 21;
pub const ILLUMINANT_D75: u16 = 22;
pub const ILLUMINANT_D50: u16 = 23;
pub const ILLUMINANT_ISO_STUDIO_TUNGSTEN: u16 = 24;
pub const ILLUMINANT_OTHER: u16 = 255;

/// Light source a color matrix was calibrated under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Illuminant {
    Unknown,
    Daylight,
    Fluorescent,
    Tungsten,
    Flash,
    FineWeather,
    CloudyWeather,
    Shade,
    DaylightFluorescent,
    DayWhiteFluorescent,
    CoolWhiteFluorescent,
    WhiteFluorescent,
    StandardLightA,
    StandardLightB,
    StandardLightC,
    D55,
    D65,
    D75,
    D50,
    IsoStudioTungsten,
    Other,
}

impl Illuminant {
    pub fn code(self) -> u16 {
        match self {
            Illuminant::Unknown => ILLUMINANT_UNKNOWN,
            Illuminant::Daylight => ILLUMINANT_DAYLIGHT,
            Illuminant::Fluorescent => ILLUMINANT_FLUORESCENT,
            Illuminant::Tungsten => ILLUMINANT_TUNGSTEN,
            Illuminant::Flash => ILLUMINANT_FLASH,
            Illuminant::FineWeather => ILLUMINANT_FINE_WEATHER,
            Illuminant::CloudyWeather => ILLUMINANT_CLOUDY_WEATHER,
            Illuminant::Shade => ILLUMINANT_SHADE,
            Illuminant::DaylightFluorescent => ILLUMINANT_DAYLIGHT_FLUORESCENT,
            Illuminant::DayWhiteFluorescent => ILLUMINANT_DAY_WHITE_FLUORESCENT,
            Illuminant::CoolWhiteFluorescent => ILLUMINANT_COOL_WHITE_FLUORESCENT,
            Illuminant::WhiteFluorescent => ILLUMINANT_WHITE_FLUORESCENT,
            Illuminant::StandardLightA => ILLUMINANT_STANDARD_LIGHT_A,
            Illuminant::StandardLightB => ILLUMINANT_STANDARD_LIGHT_B,
            Illuminant::StandardLightC => ILLUMINANT_STANDARD_LIGHT_C,
            Illuminant::D55 => ILLUMINANT_D55,
            Illuminant::D65 => ILLUMINANT_D65,
            Illuminant::D75 => ILLUMINANT_D75,
            Illuminant::D50 => ILLUMINANT_D50,
            Illuminant::IsoStudioTungsten => ILLUMINANT_ISO_STUDIO_TUNGSTEN,
            Illuminant::Other => ILLUMINANT_OTHER,
        }
    }

    pub fn from_code(code: u16) -> Result<Self> {
        let illuminant = match code {
            ILLUMINANT_UNKNOWN => Illuminant::Unknown,
            ILLUMINANT_DAYLIGHT => Illuminant::Daylight,
            ILLUMINANT_FLUORESCENT => Illuminant::Fluorescent,
            ILLUMINANT_TUNGSTEN => Illuminant::Tungsten,
            ILLUMINANT_FLASH => Illuminant::Flash,
            ILLUMINANT_FINE_WEATHER => Illuminant::FineWeather,
            ILLUMINANT_CLOUDY_WEATHER => Illuminant::CloudyWeather,
            ILLUMINANT_SHADE => Illuminant::Shade,
            ILLUMINANT_DAYLIGHT_FLUORESCENT => Illuminant::DaylightFluorescent,
            ILLUMINANT_DAY_WHITE_FLUORESCENT => Illuminant::DayWhiteFluorescent,
            ILLUMINANT_COOL_WHITE_FLUORESCENT => Illuminant::CoolWhiteFluorescent,
            ILLUMINANT_WHITE_FLUORESCENT => Illuminant::WhiteFluorescent,
            ILLUMINANT_STANDARD_LIGHT_A => Illuminant::StandardLightA,
            ILLUMINANT_STANDARD_LIGHT_B => Illuminant::StandardLightB,
            ILLUMINANT_STANDARD_LIGHT_C => Illuminant::StandardLightC,
            ILLUMINANT_D55 => Illuminant::D55,
            ILLUMINANT_D65 => Illuminant::D65,
            ILLUMINANT_D75 => Illuminant::D75,
            ILLUMINANT_D50 => Illuminant::D50,
            ILLUMINANT_ISO_STUDIO_TUNGSTEN => Illuminant::IsoStudioTungsten,
            ILLUMINANT_OTHER => Illuminant::Other,
            other => return Err(DngError::InvalidIlluminant(other)),
        };
        Ok(illuminant)
    }
}

impl TryFrom<u16> for Illuminant {
    type Error = DngError;

    fn try_from(code: u16) -> Result<Self> {
        Illuminant::from_code(code)
    }
}

impl From<Illuminant> for u16 {
    fn from(illuminant: Illuminant) -> u16 {
        illuminant.code()
    }
}
