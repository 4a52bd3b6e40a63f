//! Pipeline conversions module
//!
//! This module contains orchestration logic for converting raster images
//! into raw RGB888 dumps.

mod image_to_rgb;

#[cfg(test)]
mod tests;

pub use image_to_rgb::{ConversionReport, ImageToRgbPipeline};
