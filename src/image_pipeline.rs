//! Image processing pipeline module
//!
//! This module provides a structured approach to the background strip
//! conversion, with separate modules for RGBA decoding, the near-white
//! knockout transform, PNG writing, and conversion orchestration.

pub mod common;
pub mod conversions;
pub mod knockout;
pub mod png;
pub mod rgba;

pub use common::{Result, StripError};

pub use rgba::{ImageCrateReader, RgbaImageData, RgbaImageReader};

pub use knockout::{DEFAULT_THRESHOLD, KNOCKOUT_PIXEL, strip_background};

pub use png::{
    PngCompression, PngRowFilter, PngWriter, StandardPngWriter, StripConfig, StripConfigBuilder,
};

pub use conversions::BackgroundStripPipeline;
