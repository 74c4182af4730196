use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::rgba::types::RgbaImageData;

pub trait RgbaImageReader {
    fn read_rgba(&self, data: &[u8]) -> Result<RgbaImageData>;
}
