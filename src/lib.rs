pub mod dng;
pub mod logger;
