//! Common utilities module
//!
//! This module contains the error type shared across the DNG writer.

pub mod error;

pub use error::{DngError, ErrorKind, Result};
