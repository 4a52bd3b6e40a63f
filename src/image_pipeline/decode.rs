//! Image decoding module
//!
//! This module provides the format-agnostic decoded-image model and the
//! reader seam that produces it.

mod image_crate_reader;
mod reader;
pub mod types;

pub use image_crate_reader::ImageCrateReader;
pub use reader::ImageReader;
pub use types::{ColorMode, DecodedImage, Palette};
