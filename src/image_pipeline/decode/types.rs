//! Decoded image data types

/// How pixel channels are stored in a [`DecodedImage`] buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// One luminance byte per pixel
    Grayscale,
    /// Luminance plus alpha, two bytes per pixel
    GrayscaleAlpha,
    /// Interleaved R, G, B, three bytes per pixel
    Rgb,
    /// Interleaved R, G, B, A, four bytes per pixel
    Rgba,
    /// One palette index byte per pixel, colors resolved through a [`Palette`]
    Indexed,
}

impl ColorMode {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            ColorMode::Grayscale | ColorMode::Indexed => 1,
            ColorMode::GrayscaleAlpha => 2,
            ColorMode::Rgb => 3,
            ColorMode::Rgba => 4,
        }
    }

    /// Whether the pixel buffer itself carries an alpha channel.
    pub fn has_alpha(&self) -> bool {
        matches!(self, ColorMode::GrayscaleAlpha | ColorMode::Rgba)
    }
}

/// Color table for [`ColorMode::Indexed`] images.
#[derive(Debug, Clone)]
pub struct Palette {
    /// RGB entries, indexed by pixel byte value
    pub entries: Vec<[u8; 3]>,
    /// Per-entry alpha table. May be shorter than `entries`; entries past its
    /// end are opaque. `None` means the palette declares no transparency.
    pub transparency: Option<Vec<u8>>,
}

impl Palette {
    pub fn opaque(entries: Vec<[u8; 3]>) -> Self {
        Self {
            entries,
            transparency: None,
        }
    }

    /// Alpha value for a palette entry, opaque past the end of the table.
    pub fn alpha_for(&self, index: u8) -> u8 {
        self.transparency
            .as_ref()
            .and_then(|table| table.get(index as usize).copied())
            .unwrap_or(u8::MAX)
    }
}

/// A decoded raster image as handed over by an [`ImageReader`].
///
/// [`ImageReader`]: crate::image_pipeline::decode::ImageReader
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Channel layout of `data`
    pub mode: ColorMode,
    /// Row-major interleaved pixel bytes
    pub data: Vec<u8>,
    /// Color table, present iff `mode` is [`ColorMode::Indexed`]
    pub palette: Option<Palette>,
}

impl DecodedImage {
    /// Whether reducing this image requires alpha compositing.
    pub fn has_transparency(&self) -> bool {
        self.mode.has_alpha()
            || (self.mode == ColorMode::Indexed
                && self
                    .palette
                    .as_ref()
                    .is_some_and(|p| p.transparency.is_some()))
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}
