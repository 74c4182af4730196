//! RGBA image data types

/// Decoded image data in interleaved RGBA order, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Pixel data, 4 bytes per pixel (R, G, B, A), length `width * height * 4`
    pub data: Vec<u8>,
}

impl RgbaImageData {
    /// Number of pixels in the image.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// The RGBA channel values of the pixel at `(x, y)`.
    ///
    /// Panics if the coordinates are outside the image; callers index within
    /// `width`/`height` bounds they already hold.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let offset = (y * self.width + x) * 4;
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
            self.data[offset + 3],
        ]
    }
}
