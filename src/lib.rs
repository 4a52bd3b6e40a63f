//! Raster image to raw RGB888 conversion.
//!
//! Decodes common raster formats (PNG, JPEG, BMP), flattens them to
//! headerless interleaved RGB888 bytes, and batch-processes directories of
//! image assets into `.rgb` dumps.

pub mod image_pipeline;
pub mod logger;
