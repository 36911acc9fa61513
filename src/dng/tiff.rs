//! DNG tag writing module
//!
//! The tag registry, the [`TagWriter`] capability the encoder drives, and a
//! `tiff` crate backed implementation of it.

mod writer;
mod standard_tag_writer;
pub mod tags;
pub mod types;

pub use writer::TagWriter;
pub use standard_tag_writer::StandardTagWriter;
pub use tags::{DngTag, SRational, TagField, TagValue};
pub use types::{DngOptions, DngOptionsBuilder};
