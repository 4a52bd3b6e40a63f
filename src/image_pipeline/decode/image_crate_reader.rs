//! Image reader implementation using the `image` library.
//!
//! This module provides support for reading the common raster formats the
//! `image` crate can decode from memory (PNG, JPEG, BMP, and others). Decoded
//! frames are mapped onto the crate's own [`DecodedImage`] model, narrowing
//! wide sample formats down to 8 bits per channel at the decode stage.

use image::DynamicImage;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::decode::reader::ImageReader;
use crate::image_pipeline::decode::types::{ColorMode, DecodedImage};

/// Image reader that uses the `image` crate for decoding.
///
/// # Examples
///
/// ```no_run
/// use rgbpack_rs::image_pipeline::{ImageCrateReader, ImageReader};
///
/// let reader = ImageCrateReader;
/// let bytes = std::fs::read("logo.png").unwrap();
/// let image = reader.read_image(&bytes).unwrap();
/// println!("{}x{} {:?}", image.width, image.height, image.mode);
/// ```
pub struct ImageCrateReader;

impl ImageReader for ImageCrateReader {
    /// Decodes image data from a byte array.
    ///
    /// 8-bit grayscale, grayscale-alpha, RGB, and RGBA frames map directly
    /// onto the corresponding [`ColorMode`]. 16-bit and float sample formats
    /// are narrowed to 8 bits per channel here, so the reducer only ever sees
    /// byte channels. Anything else is an [`UnsupportedFormat`] error.
    ///
    /// [`UnsupportedFormat`]: ConversionError::UnsupportedFormat
    fn read_image(&self, data: &[u8]) -> Result<DecodedImage> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| ConversionError::DecodeError(e.to_string()))?;

        let width = decoded.width() as usize;
        let height = decoded.height() as usize;

        debug!("Decoded image: {}x{} {:?}", width, height, decoded.color());

        let (mode, data) = match decoded {
            DynamicImage::ImageLuma8(buf) => (ColorMode::Grayscale, buf.into_raw()),
            DynamicImage::ImageLumaA8(buf) => (ColorMode::GrayscaleAlpha, buf.into_raw()),
            DynamicImage::ImageRgb8(buf) => (ColorMode::Rgb, buf.into_raw()),
            DynamicImage::ImageRgba8(buf) => (ColorMode::Rgba, buf.into_raw()),
            img @ (DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_)
            | DynamicImage::ImageRgb16(_)
            | DynamicImage::ImageRgba16(_)
            | DynamicImage::ImageRgb32F(_)
            | DynamicImage::ImageRgba32F(_)) => {
                if img.color().has_alpha() {
                    (ColorMode::Rgba, img.to_rgba8().into_raw())
                } else {
                    (ColorMode::Rgb, img.to_rgb8().into_raw())
                }
            }
            other => {
                return Err(ConversionError::UnsupportedFormat(format!(
                    "{:?}",
                    other.color()
                )));
            }
        };

        Ok(DecodedImage {
            width,
            height,
            mode,
            data,
            palette: None,
        })
    }
}
