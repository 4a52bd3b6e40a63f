use std::path::Path;

use anyhow::bail;
use tracing::info;

use rgbpack_rs::image_pipeline::{ConversionConfig, ImageToRgbPipeline, batch};
use rgbpack_rs::logger;

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting rgbpack {}", env!("BUILD_VERSION"));

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        bail!("Usage: {} <input_directory> <output_directory>", args[0]);
    }

    let input_dir = Path::new(&args[1]);
    let output_dir = Path::new(&args[2]);

    let pipeline = ImageToRgbPipeline::new(ConversionConfig::default());

    info!("Image to RGB888 pipeline initialized");
    info!(
        "Dimension validation: {}",
        if pipeline.config().validate_dimensions {
            "enabled"
        } else {
            "disabled"
        }
    );

    let summary = batch::convert_directory(&pipeline, input_dir, output_dir)?;

    info!(
        "Batch complete: {} converted, {} failed",
        summary.converted(),
        summary.failed()
    );

    Ok(())
}
