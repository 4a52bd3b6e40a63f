use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::conversions::ImageToRgbPipeline;
use crate::image_pipeline::decode::{ColorMode, DecodedImage, ImageReader};
use crate::image_pipeline::reduce::Rgb888Buffer;
use crate::image_pipeline::rgb::{ConversionConfig, RgbWriter};

struct MockReader {
    should_fail: bool,
    mock_image: Option<DecodedImage>,
}

impl ImageReader for MockReader {
    fn read_image(&self, _data: &[u8]) -> Result<DecodedImage> {
        if self.should_fail {
            return Err(ConversionError::DecodeError("Mock decode error".to_string()));
        }
        Ok(self.mock_image.clone().unwrap_or(DecodedImage {
            width: 4,
            height: 4,
            mode: ColorMode::Rgb,
            data: vec![0u8; 4 * 4 * 3],
            palette: None,
        }))
    }
}

struct MockWriter {
    should_fail: bool,
    written: Arc<Mutex<Vec<Rgb888Buffer>>>,
}

impl RgbWriter for MockWriter {
    fn write_rgb(&self, image: &Rgb888Buffer, _output: &mut dyn Write) -> Result<()> {
        if self.should_fail {
            return Err(ConversionError::OutputWriteError(
                "Mock write error".to_string(),
            ));
        }
        self.written.lock().unwrap().push(image.clone());
        Ok(())
    }
}

#[test]
fn test_successful_conversion() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader {
        should_fail: false,
        mock_image: None,
    };
    let writer = MockWriter {
        should_fail: false,
        written: written.clone(),
    };

    let pipeline = ImageToRgbPipeline::with_custom(reader, writer, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let report = pipeline.convert(b"fake image data", &mut output).unwrap();

    assert_eq!((report.width, report.height), (4, 4));
    assert_eq!(report.bytes, 4 * 4 * 3);
    assert_eq!(written.lock().unwrap().len(), 1);
}

#[test]
fn test_reader_failure() {
    let reader = MockReader {
        should_fail: true,
        mock_image: None,
    };
    let writer = MockWriter {
        should_fail: false,
        written: Arc::new(Mutex::new(Vec::new())),
    };

    let pipeline = ImageToRgbPipeline::with_custom(reader, writer, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake image data", &mut output);

    assert!(matches!(
        result.unwrap_err(),
        ConversionError::DecodeError(_)
    ));
}

#[test]
fn test_writer_failure() {
    let reader = MockReader {
        should_fail: false,
        mock_image: None,
    };
    let writer = MockWriter {
        should_fail: true,
        written: Arc::new(Mutex::new(Vec::new())),
    };

    let pipeline = ImageToRgbPipeline::with_custom(reader, writer, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake image data", &mut output);

    assert!(matches!(
        result.unwrap_err(),
        ConversionError::OutputWriteError(_)
    ));
}

#[test]
fn test_dimension_validation_failure() {
    let reader = MockReader {
        should_fail: false,
        mock_image: Some(DecodedImage {
            width: 64,
            height: 64,
            mode: ColorMode::Rgb,
            data: vec![0u8; 64 * 64 * 3],
            palette: None,
        }),
    };
    let writer = MockWriter {
        should_fail: false,
        written: Arc::new(Mutex::new(Vec::new())),
    };

    let config = ConversionConfig::builder().max_dimension(Some(32)).build();
    let pipeline = ImageToRgbPipeline::with_custom(reader, writer, config);

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake image data", &mut output);

    assert!(matches!(
        result.unwrap_err(),
        ConversionError::InvalidDimensions(64, 64)
    ));
}

#[test]
fn test_dimension_validation_disabled() {
    let reader = MockReader {
        should_fail: false,
        mock_image: Some(DecodedImage {
            width: 64,
            height: 64,
            mode: ColorMode::Rgb,
            data: vec![0u8; 64 * 64 * 3],
            palette: None,
        }),
    };
    let writer = MockWriter {
        should_fail: false,
        written: Arc::new(Mutex::new(Vec::new())),
    };

    let config = ConversionConfig::builder()
        .validate_dimensions(false)
        .max_dimension(Some(32))
        .build();
    let pipeline = ImageToRgbPipeline::with_custom(reader, writer, config);

    let mut output = Cursor::new(Vec::new());
    assert!(pipeline.convert(b"fake image data", &mut output).is_ok());
}

#[test]
fn test_zero_area_image_converts_to_empty_output() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader {
        should_fail: false,
        mock_image: Some(DecodedImage {
            width: 0,
            height: 1,
            mode: ColorMode::Rgb,
            data: Vec::new(),
            palette: None,
        }),
    };
    let writer = MockWriter {
        should_fail: false,
        written: written.clone(),
    };

    let config = ConversionConfig::builder().max_dimension(Some(4096)).build();
    let pipeline = ImageToRgbPipeline::with_custom(reader, writer, config);

    let mut output = Cursor::new(Vec::new());
    let report = pipeline.convert(b"fake image data", &mut output).unwrap();

    assert_eq!(report.bytes, 0);
    assert!(written.lock().unwrap()[0].data.is_empty());
}

#[test]
fn test_config_builder() {
    let config = ConversionConfig::builder()
        .validate_dimensions(false)
        .max_dimension(Some(10000))
        .build();

    assert!(!config.validate_dimensions);
    assert_eq!(config.max_dimension, Some(10000));
}
