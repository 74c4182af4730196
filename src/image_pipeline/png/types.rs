//! Background strip configuration types

use crate::image_pipeline::knockout::DEFAULT_THRESHOLD;

/// PNG compression levels
#[derive(Debug, Clone, Copy)]
pub enum PngCompression {
    /// Fast compression (larger file)
    Fast,
    /// Balanced compression (encoder default)
    Default,
    /// Best compression (slower)
    Best,
}

/// PNG row filter strategy applied before compression
#[derive(Debug, Clone, Copy)]
pub enum PngRowFilter {
    NoFilter,
    Sub,
    Up,
    Avg,
    Paeth,
    /// Let the encoder pick per row (default)
    Adaptive,
}

/// Configuration for the background strip conversion
#[derive(Debug, Clone)]
pub struct StripConfig {
    /// Per-channel cutoff; a pixel is knocked out when R, G, and B are all
    /// strictly greater than this value
    pub threshold: u8,
    /// Compression level for the output PNG
    pub compression: PngCompression,
    /// Row filter strategy for the output PNG
    pub filter: PngRowFilter,
    /// Whether to validate image dimensions before conversion
    pub validate_dimensions: bool,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            compression: PngCompression::Default,
            filter: PngRowFilter::Adaptive,
            validate_dimensions: true,
        }
    }
}

impl StripConfig {
    pub fn builder() -> StripConfigBuilder {
        StripConfigBuilder::default()
    }
}

/// Builder for StripConfig
#[derive(Default)]
pub struct StripConfigBuilder {
    threshold: Option<u8>,
    compression: Option<PngCompression>,
    filter: Option<PngRowFilter>,
    validate_dimensions: Option<bool>,
}

impl StripConfigBuilder {
    pub fn threshold(mut self, threshold: u8) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn compression(mut self, compression: PngCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn filter(mut self, filter: PngRowFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> StripConfig {
        let default = StripConfig::default();
        StripConfig {
            threshold: self.threshold.unwrap_or(default.threshold),
            compression: self.compression.unwrap_or(default.compression),
            filter: self.filter.unwrap_or(default.filter),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
        }
    }
}
