//! RGB888 output module
//!
//! This module provides the output writer seam and the conversion
//! configuration.

mod raw_writer;
mod writer;
pub mod types;

pub use raw_writer::StandardRgbWriter;
pub use types::{ConversionConfig, ConversionConfigBuilder};
pub use writer::RgbWriter;
