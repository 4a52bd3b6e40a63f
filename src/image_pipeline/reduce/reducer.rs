use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::decode::types::{ColorMode, DecodedImage, Palette};
use crate::image_pipeline::reduce::types::Rgb888Buffer;

/// Reduces decoded images of any supported color mode to flat RGB888.
///
/// Sources with transparency (an alpha channel, or an indexed palette that
/// declares a transparency table) are composited over an opaque black
/// background with the alpha discarded; all other sources pass their channel
/// values through untouched, grayscale expanding to equal R, G, B. The
/// reduction is a pure function: the same input always produces the same
/// bytes.
pub struct PixelFormatReducer;

/// Composite one channel over black: `channel * alpha / 255`, rounded
/// half-up. The half case cannot occur for integer products, so this is also
/// exact round-to-nearest.
fn composite_over_black(channel: u8, alpha: u8) -> u8 {
    ((channel as u32 * alpha as u32 + 127) / 255) as u8
}

impl PixelFormatReducer {
    pub fn reduce(&self, image: &DecodedImage) -> Result<Rgb888Buffer> {
        let expected = image.pixel_count() * image.mode.bytes_per_pixel();
        if image.data.len() != expected {
            return Err(ConversionError::InvalidBufferLength(
                expected,
                image.data.len(),
            ));
        }

        debug!(
            "Reducing {}x{} {:?} image to RGB888",
            image.width, image.height, image.mode
        );

        let mut out = Vec::with_capacity(image.pixel_count() * 3);

        match image.mode {
            ColorMode::Grayscale => {
                for &luma in &image.data {
                    out.extend_from_slice(&[luma, luma, luma]);
                }
            }
            ColorMode::GrayscaleAlpha => {
                for px in image.data.chunks_exact(2) {
                    let luma = composite_over_black(px[0], px[1]);
                    out.extend_from_slice(&[luma, luma, luma]);
                }
            }
            ColorMode::Rgb => {
                out.extend_from_slice(&image.data);
            }
            ColorMode::Rgba => {
                for px in image.data.chunks_exact(4) {
                    out.push(composite_over_black(px[0], px[3]));
                    out.push(composite_over_black(px[1], px[3]));
                    out.push(composite_over_black(px[2], px[3]));
                }
            }
            ColorMode::Indexed => {
                let palette = image.palette.as_ref().ok_or_else(|| {
                    ConversionError::UnsupportedFormat("indexed image without a palette".to_string())
                })?;
                reduce_indexed(&image.data, palette, &mut out)?;
            }
        }

        Ok(Rgb888Buffer {
            width: image.width,
            height: image.height,
            data: out,
        })
    }
}

fn reduce_indexed(indices: &[u8], palette: &Palette, out: &mut Vec<u8>) -> Result<()> {
    let translucent = palette.transparency.is_some();

    for &index in indices {
        let [r, g, b] = *palette.entries.get(index as usize).ok_or(
            ConversionError::InvalidPaletteIndex(index, palette.entries.len()),
        )?;

        if translucent {
            let alpha = palette.alpha_for(index);
            out.push(composite_over_black(r, alpha));
            out.push(composite_over_black(g, alpha));
            out.push(composite_over_black(b, alpha));
        } else {
            out.extend_from_slice(&[r, g, b]);
        }
    }

    Ok(())
}
