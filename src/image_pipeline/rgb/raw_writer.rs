use std::io::Write;

use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::reduce::types::Rgb888Buffer;
use crate::image_pipeline::rgb::writer::RgbWriter;

/// Writer that dumps the buffer bytes as-is.
///
/// The output stream carries no header, magic number, or dimension metadata;
/// it is exactly the `3 * width * height` interleaved RGB bytes.
pub struct StandardRgbWriter;

impl RgbWriter for StandardRgbWriter {
    fn write_rgb(&self, image: &Rgb888Buffer, output: &mut dyn Write) -> Result<()> {
        debug!(
            "Writing {} RGB888 bytes ({}x{})",
            image.byte_len(),
            image.width,
            image.height
        );

        output.write_all(&image.data)?;
        Ok(())
    }
}
