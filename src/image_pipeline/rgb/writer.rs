use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::reduce::types::Rgb888Buffer;

pub trait RgbWriter {
    fn write_rgb(&self, image: &Rgb888Buffer, output: &mut dyn Write) -> Result<()>;
}
