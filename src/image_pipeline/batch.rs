//! Directory batch conversion with per-file failure isolation.

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::conversions::{ConversionReport, ImageToRgbPipeline};
use crate::image_pipeline::decode::ImageReader;
use crate::image_pipeline::rgb::RgbWriter;

/// Extension the raw dumps are written under.
pub const OUTPUT_EXTENSION: &str = "rgb";

/// Source extensions the batch scanner picks up.
const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/// Whether a path has a supported raster image extension.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Outcome of processing a single file.
#[derive(Debug)]
pub struct FileResult {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub report: Option<ConversionReport>,
    pub error: Option<String>,
}

/// Accumulated batch outcome.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub results: Vec<FileResult>,
}

impl BatchSummary {
    pub fn converted(&self) -> usize {
        self.results.iter().filter(|r| r.error.is_none()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| r.error.is_some()).count()
    }
}

/// Convert every supported image directly inside `input_dir` into a raw
/// RGB888 dump under `output_dir`, one file at a time.
///
/// The output directory is created if missing, and files are processed in
/// name order. A file that fails to convert is logged and recorded in the
/// summary; it never aborts the rest of the batch.
pub fn convert_directory<R: ImageReader, W: RgbWriter>(
    pipeline: &ImageToRgbPipeline<R, W>,
    input_dir: &Path,
    output_dir: &Path,
) -> Result<BatchSummary> {
    if !input_dir.is_dir() {
        return Err(ConversionError::InputReadError(format!(
            "input directory does not exist: {}",
            input_dir.display()
        )));
    }

    std::fs::create_dir_all(output_dir)?;

    let mut files: Vec<PathBuf> = std::fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_image_file(path))
        .collect();
    files.sort();

    if files.is_empty() {
        warn!("No image files found in {}", input_dir.display());
        return Ok(BatchSummary::default());
    }

    let mut summary = BatchSummary::default();

    for input_path in files {
        // is_image_file guarantees an extension, so a stem exists
        let Some(stem) = input_path.file_stem() else {
            continue;
        };
        let output_path = output_dir.join(stem).with_extension(OUTPUT_EXTENSION);

        match pipeline.convert_file(&input_path, &output_path) {
            Ok(report) => {
                info!(
                    "Success: {} -> {} ({}x{}, {} bytes)",
                    input_path.display(),
                    output_path.display(),
                    report.width,
                    report.height,
                    report.bytes
                );
                summary.results.push(FileResult {
                    input_path,
                    output_path,
                    report: Some(report),
                    error: None,
                });
            }
            Err(e) => {
                error!("Error processing {}: {}", input_path.display(), e);
                summary.results.push(FileResult {
                    input_path,
                    output_path,
                    report: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    Ok(summary)
}
