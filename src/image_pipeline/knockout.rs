//! Near-white knockout transform
//!
//! The classification and replacement rule at the heart of the tool: a pixel
//! whose red, green, and blue channels each exceed the threshold is replaced
//! wholesale by transparent white; every other pixel is copied unchanged,
//! original alpha included. The transform is a pure map over the pixel
//! sequence so it can be tested without any file I/O.

use tracing::debug;

use crate::image_pipeline::rgba::types::RgbaImageData;

/// Per-channel brightness cutoff above which a pixel counts as near-white.
pub const DEFAULT_THRESHOLD: u8 = 240;

/// Replacement value for near-white pixels: white with zero alpha.
pub const KNOCKOUT_PIXEL: [u8; 4] = [255, 255, 255, 0];

/// True iff all three color channels are strictly greater than `threshold`.
/// Alpha plays no part in classification.
pub fn is_near_white(pixel: [u8; 4], threshold: u8) -> bool {
    pixel[0] > threshold && pixel[1] > threshold && pixel[2] > threshold
}

/// Maps a single pixel: near-white becomes [`KNOCKOUT_PIXEL`], anything else
/// passes through untouched.
pub fn knockout_pixel(pixel: [u8; 4], threshold: u8) -> [u8; 4] {
    if is_near_white(pixel, threshold) {
        KNOCKOUT_PIXEL
    } else {
        pixel
    }
}

/// Applies the knockout rule to every pixel, producing a new image with the
/// same dimensions and pixel ordering.
pub fn strip_background(image: &RgbaImageData, threshold: u8) -> RgbaImageData {
    let mut data = Vec::with_capacity(image.data.len());
    let mut stripped = 0usize;

    for chunk in image.data.chunks_exact(4) {
        let pixel = [chunk[0], chunk[1], chunk[2], chunk[3]];
        let mapped = knockout_pixel(pixel, threshold);
        if mapped != pixel {
            stripped += 1;
        }
        data.extend_from_slice(&mapped);
    }

    debug!(
        "Knocked out {} of {} pixels (threshold {})",
        stripped,
        image.pixel_count(),
        threshold
    );

    RgbaImageData {
        width: image.width,
        height: image.height,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_from_pixels(width: usize, height: usize, pixels: &[[u8; 4]]) -> RgbaImageData {
        RgbaImageData {
            width,
            height,
            data: pixels.iter().flatten().copied().collect(),
        }
    }

    #[test]
    fn test_threshold_is_strictly_greater_than() {
        assert!(!is_near_white([240, 240, 240, 255], DEFAULT_THRESHOLD));
        assert!(is_near_white([241, 241, 241, 255], DEFAULT_THRESHOLD));
    }

    #[test]
    fn test_all_channels_must_exceed_threshold() {
        assert!(!is_near_white([255, 255, 240, 255], DEFAULT_THRESHOLD));
        assert!(!is_near_white([240, 255, 255, 255], DEFAULT_THRESHOLD));
        assert!(!is_near_white([255, 240, 255, 255], DEFAULT_THRESHOLD));
    }

    #[test]
    fn test_alpha_ignored_for_classification() {
        assert!(is_near_white([255, 255, 255, 0], DEFAULT_THRESHOLD));
        assert_eq!(
            knockout_pixel([255, 255, 255, 0], DEFAULT_THRESHOLD),
            KNOCKOUT_PIXEL
        );
    }

    #[test]
    fn test_boundary_pixels() {
        assert_eq!(
            knockout_pixel([240, 240, 240, 255], DEFAULT_THRESHOLD),
            [240, 240, 240, 255]
        );
        assert_eq!(
            knockout_pixel([241, 241, 241, 255], DEFAULT_THRESHOLD),
            KNOCKOUT_PIXEL
        );
    }

    #[test]
    fn test_non_white_pixel_copied_exactly() {
        // Original alpha survives, including partial transparency.
        assert_eq!(
            knockout_pixel([10, 20, 30, 128], DEFAULT_THRESHOLD),
            [10, 20, 30, 128]
        );
    }

    #[test]
    fn test_two_pixel_sequence() {
        let input = image_from_pixels(2, 1, &[[255, 255, 255, 255], [10, 20, 30, 255]]);
        let output = strip_background(&input, DEFAULT_THRESHOLD);

        assert_eq!(output.width, 2);
        assert_eq!(output.height, 1);
        assert_eq!(output.pixel(0, 0), [255, 255, 255, 0]);
        assert_eq!(output.pixel(1, 0), [10, 20, 30, 255]);
    }

    #[test]
    fn test_dimensions_preserved() {
        let input = image_from_pixels(3, 2, &[[250, 250, 250, 255]; 6]);
        let output = strip_background(&input, DEFAULT_THRESHOLD);

        assert_eq!(output.width, input.width);
        assert_eq!(output.height, input.height);
        assert_eq!(output.data.len(), input.data.len());
    }

    #[test]
    fn test_idempotent() {
        let input = image_from_pixels(
            2,
            2,
            &[
                [255, 255, 255, 255],
                [241, 241, 241, 10],
                [240, 240, 240, 255],
                [0, 0, 0, 255],
            ],
        );
        let once = strip_background(&input, DEFAULT_THRESHOLD);
        let twice = strip_background(&once, DEFAULT_THRESHOLD);

        assert_eq!(once, twice);
    }
}
