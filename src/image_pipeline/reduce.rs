//! Pixel format reduction module
//!
//! This module flattens decoded images of any supported color mode into raw
//! interleaved RGB888.

mod reducer;
pub mod types;

pub use reducer::PixelFormatReducer;
pub use types::Rgb888Buffer;
