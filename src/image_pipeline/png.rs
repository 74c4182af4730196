//! PNG writing module
//!
//! This module provides PNG file writing capabilities with various
//! compression and row-filter options.

mod standard_png_writer;
pub mod types;
mod writer;

pub use standard_png_writer::StandardPngWriter;
pub use types::{PngCompression, PngRowFilter, StripConfig, StripConfigBuilder};
pub use writer::PngWriter;
