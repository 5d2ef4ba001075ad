//! Border trimming.
//!
//! Trimming removes the same number of pixels from all four edges. The
//! result keeps the centre of the image:
//!
//! ```text
//! trimmed[i][j] = original[i + margin][j + margin]
//! ```
//!
//! # Example
//!
//! ```ignore
//! // 100x80 -> 80x60
//! let trimmed = trim(&image, 10)?;
//! ```

use tracing::{debug, warn};

use super::TransformError;
use crate::buffer::PixelBuffer;

/// Remove `margin` pixels from each edge of an image.
///
/// # Arguments
///
/// * `image` - Source image
/// * `margin` - Pixels to remove from each of the four edges
///
/// # Returns
///
/// A new `PixelBuffer` of `(height - 2*margin) x (width - 2*margin)` pixels.
///
/// # Errors
///
/// Returns `TransformError::MarginTooLarge` unless both the height and the
/// width are strictly greater than `2 * margin`.
pub fn trim(image: &PixelBuffer, margin: usize) -> Result<PixelBuffer, TransformError> {
    let (height, width) = image.dimensions();
    let too_large = TransformError::MarginTooLarge {
        margin,
        width,
        height,
    };

    let border = margin.checked_mul(2).ok_or_else(|| too_large.clone())?;
    if height <= border || width <= border {
        return Err(too_large);
    }

    let out_height = height - border;
    let out_width = width - border;

    let mut output = Vec::with_capacity(out_width * out_height);

    // Copy the centre row by row
    for row in image.pixels()[margin * width..(margin + out_height) * width].chunks_exact(width) {
        output.extend_from_slice(&row[margin..margin + out_width]);
    }

    debug!(
        margin,
        from = ?(height, width),
        to = ?(out_height, out_width),
        "trimmed image"
    );

    Ok(PixelBuffer::from_raw_parts(out_width, out_height, output))
}

/// Trim, falling back to an unchanged copy when the margin is too large.
///
/// A skipped trim is reported with a `warn!` event. Callers that must know
/// whether trimming happened should use [`trim`] instead.
pub fn trim_or_keep(image: &PixelBuffer, margin: usize) -> PixelBuffer {
    match trim(image, margin) {
        Ok(trimmed) => trimmed,
        Err(err) => {
            warn!("{err}; keeping the image untrimmed");
            image.clone()
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::color::PackedColor;
    use proptest::prelude::*;

    fn create_test_image(width: usize, height: usize) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |row, col| {
            PackedColor::from((row * 1000 + col) as u32)
        })
    }

    proptest! {
        /// Property: Valid trims shrink each dimension by twice the margin.
        #[test]
        fn prop_trim_dimensions(
            margin in 0usize..=20,
            (extra_w, extra_h) in (1usize..=20, 1usize..=20),
        ) {
            let (width, height) = (2 * margin + extra_w, 2 * margin + extra_h);
            let img = create_test_image(width, height);
            let result = trim(&img, margin).unwrap();

            prop_assert_eq!(result.width(), width - 2 * margin);
            prop_assert_eq!(result.height(), height - 2 * margin);
        }

        /// Property: Every output pixel is the input pixel offset by the margin.
        #[test]
        fn prop_trim_element_mapping(
            margin in 0usize..=10,
            (extra_w, extra_h) in (1usize..=20, 1usize..=20),
        ) {
            let (width, height) = (2 * margin + extra_w, 2 * margin + extra_h);
            let img = create_test_image(width, height);
            let result = trim(&img, margin).unwrap();

            for i in 0..result.height() {
                for j in 0..result.width() {
                    prop_assert_eq!(result.get(i, j), img.get(i + margin, j + margin));
                }
            }
        }

        /// Property: Oversized margins fail and the fallback returns the input unchanged.
        #[test]
        fn prop_oversized_trim_is_identity(
            (width, height, margin) in (1usize..=40, 1usize..=40).prop_flat_map(|(w, h)| {
                // Smallest margin that consumes the shorter side
                let min_margin = (w.min(h) + 1) / 2;
                (Just(w), Just(h), min_margin..=40)
            }),
        ) {
            let img = create_test_image(width, height);

            let is_too_large = matches!(
                trim(&img, margin),
                Err(TransformError::MarginTooLarge { .. })
            );
            prop_assert!(is_too_large);
            prop_assert_eq!(trim_or_keep(&img, margin), img);
        }
    }
}
