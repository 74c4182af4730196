use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;

use crate::image_pipeline::common::error::{Result, StripError};
use crate::image_pipeline::png::types::{PngCompression, PngRowFilter, StripConfig};
use crate::image_pipeline::png::writer::PngWriter;
use crate::image_pipeline::rgba::types::RgbaImageData;

pub struct StandardPngWriter;

impl PngWriter for StandardPngWriter {
    fn write_png(
        &self,
        image: &RgbaImageData,
        output: &mut dyn Write,
        config: &StripConfig,
    ) -> Result<()> {
        debug!("Encoding PNG image: {}x{}", image.width, image.height);

        let compression = match config.compression {
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Default => CompressionType::Default,
            PngCompression::Best => CompressionType::Best,
        };

        let filter = match config.filter {
            PngRowFilter::NoFilter => FilterType::NoFilter,
            PngRowFilter::Sub => FilterType::Sub,
            PngRowFilter::Up => FilterType::Up,
            PngRowFilter::Avg => FilterType::Avg,
            PngRowFilter::Paeth => FilterType::Paeth,
            PngRowFilter::Adaptive => FilterType::Adaptive,
        };

        let mut buffer = Vec::new();

        let encoder =
            PngEncoder::new_with_quality(std::io::Cursor::new(&mut buffer), compression, filter);

        encoder
            .write_image(
                &image.data,
                image.width as u32,
                image.height as u32,
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| StripError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("PNG encoding complete");
        Ok(())
    }
}
