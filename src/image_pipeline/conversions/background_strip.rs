use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::image_pipeline::{
    common::error::{Result, StripError},
    knockout::strip_background,
    png::{PngWriter, StandardPngWriter, StripConfig},
    rgba::{ImageCrateReader, RgbaImageReader},
};

pub struct BackgroundStripPipeline<R: RgbaImageReader, W: PngWriter> {
    reader: R,
    writer: W,
    config: StripConfig,
}

impl BackgroundStripPipeline<ImageCrateReader, StandardPngWriter> {
    pub fn new(config: StripConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            writer: StandardPngWriter,
            config,
        }
    }
}

impl<R: RgbaImageReader, W: PngWriter> BackgroundStripPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: StripConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(StripError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting background strip conversion");

        let source = {
            let _span = tracing::info_span!("decode_image").entered();
            self.reader.read_rgba(input_data)?
        };

        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = source.width,
                height = source.height
            )
            .entered();
            self.validate_dimensions(source.width, source.height)?;
        }

        let stripped = {
            let _span =
                tracing::info_span!("strip_background", threshold = self.config.threshold).entered();
            strip_background(&source, self.config.threshold)
        };

        {
            let _span = tracing::info_span!("encode_png").entered();
            self.writer.write_png(&stripped, output, &self.config)?;
        }

        info!(
            width = stripped.width,
            height = stripped.height,
            "Conversion complete"
        );
        Ok(())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                StripError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        // Convert fully in memory before touching the output path, so a
        // decode failure never leaves a partial file on disk.
        let mut encoded = Vec::new();
        self.convert(&input_data, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            std::fs::write(output_path, &encoded).map_err(|e| {
                StripError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(())
    }

    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: StripConfig) {
        self.config = config;
    }
}
