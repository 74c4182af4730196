//! RGBA image reading module
//!
//! This module provides format-agnostic decoding into interleaved RGBA data.

mod image_crate_reader;
mod reader;
pub mod types;

pub use image_crate_reader::ImageCrateReader;
pub use reader::RgbaImageReader;
pub use types::RgbaImageData;
