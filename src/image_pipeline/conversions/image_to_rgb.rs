use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    decode::{ImageCrateReader, ImageReader},
    reduce::PixelFormatReducer,
    rgb::{ConversionConfig, RgbWriter, StandardRgbWriter},
};

/// Summary of one successful conversion, for per-file status reporting.
#[derive(Debug, Clone, Copy)]
pub struct ConversionReport {
    pub width: usize,
    pub height: usize,
    pub bytes: usize,
}

pub struct ImageToRgbPipeline<R: ImageReader, W: RgbWriter> {
    reader: R,
    reducer: PixelFormatReducer,
    writer: W,
    config: ConversionConfig,
}

impl ImageToRgbPipeline<ImageCrateReader, StandardRgbWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            reducer: PixelFormatReducer,
            writer: StandardRgbWriter,
            config,
        }
    }
}

impl<R: ImageReader, W: RgbWriter> ImageToRgbPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            reducer: PixelFormatReducer,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        // Zero-area images are valid and reduce to an empty buffer.
        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                return Err(ConversionError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<ConversionReport> {
        info!("Starting image to RGB888 conversion");

        let image = {
            let _span = tracing::info_span!("decode_image").entered();
            self.reader.read_image(input_data)?
        };

        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = image.width,
                height = image.height
            )
            .entered();
            self.validate_dimensions(image.width, image.height)?;
        }

        let rgb = {
            let _span = tracing::info_span!("reduce_pixels").entered();
            self.reducer.reduce(&image)?
        };

        {
            let _span = tracing::info_span!("write_rgb888").entered();
            self.writer.write_rgb(&rgb, output)?;
        }

        info!(
            width = rgb.width,
            height = rgb.height,
            bytes = rgb.byte_len(),
            "Conversion complete"
        );

        Ok(ConversionReport {
            width: rgb.width,
            height: rgb.height,
            bytes: rgb.byte_len(),
        })
    }

    /// Converts a single image file into a raw RGB888 dump.
    ///
    /// The output is materialized in memory first and only written to disk
    /// after the whole conversion succeeded, so a failing input never leaves
    /// a truncated or empty dump behind.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<ConversionReport> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut encoded = Vec::new();
        let report = self.convert(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(report)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
