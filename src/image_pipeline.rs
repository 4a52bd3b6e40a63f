//! Image processing pipeline module
//!
//! This module provides a structured approach to converting raster images
//! into raw RGB888 dumps, with separate modules for decoding, pixel format
//! reduction, output writing, and conversion orchestration.

pub mod batch;
pub mod common;
pub mod conversions;
pub mod decode;
pub mod reduce;
pub mod rgb;

pub use common::{ConversionError, Result};

pub use decode::{ColorMode, DecodedImage, ImageCrateReader, ImageReader, Palette};

pub use reduce::{PixelFormatReducer, Rgb888Buffer};

pub use rgb::{ConversionConfig, ConversionConfigBuilder, RgbWriter, StandardRgbWriter};

pub use conversions::{ConversionReport, ImageToRgbPipeline};

pub use batch::{BatchSummary, FileResult};
