//! RGBA reader implementation backed by the `image` crate.
//!
//! This module decodes any bitmap format the `image` crate recognizes (the
//! tool is pointed at a PNG logo, but nothing here is PNG-specific) and
//! normalizes the result to 8-bit interleaved RGBA. Sources without an alpha
//! channel gain a fully opaque one during conversion.

use tracing::debug;

use crate::image_pipeline::common::error::{Result, StripError};
use crate::image_pipeline::rgba::reader::RgbaImageReader;
use crate::image_pipeline::rgba::types::RgbaImageData;

/// Image reader that uses the `image` crate for decoding.
pub struct ImageCrateReader;

impl RgbaImageReader for ImageCrateReader {
    /// Decodes image data from a byte array into RGBA.
    ///
    /// This method:
    /// 1. Sniffs the format and decodes the file using `image::load_from_memory`
    /// 2. Converts the decoded image to 8-bit RGBA, adding an opaque alpha
    ///    channel where the source has none
    ///
    /// # Arguments
    ///
    /// * `data` - Raw bytes of the source image file
    ///
    /// # Returns
    ///
    /// * `Ok(RgbaImageData)` - Successfully decoded RGBA image
    /// * `Err(StripError::DecodeError)` - Corrupt or unsupported image data
    fn read_rgba(&self, data: &[u8]) -> Result<RgbaImageData> {
        debug!("Decoding source image, {} bytes", data.len());

        let decoded =
            image::load_from_memory(data).map_err(|e| StripError::DecodeError(e.to_string()))?;

        let rgba = decoded.to_rgba8();
        let width = rgba.width() as usize;
        let height = rgba.height() as usize;

        debug!("Decoded image: {}x{}", width, height);

        Ok(RgbaImageData {
            width,
            height,
            data: rgba.into_raw(),
        })
    }
}
