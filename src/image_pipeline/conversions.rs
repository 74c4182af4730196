//! Pipeline conversions module
//!
//! This module contains orchestration logic for the background strip
//! conversion.

mod background_strip;

pub use background_strip::BackgroundStripPipeline;
