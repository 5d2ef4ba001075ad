//! Half-turn rotation.
//!
//! Rotating by 180 degrees keeps the dimensions and reverses the pixel order
//! along both axes:
//!
//! ```text
//! rotated[i][j] = original[height - 1 - i][width - 1 - j]
//! ```
//!
//! In a row-major buffer that is exactly a reversal of the flat pixel data.

use tracing::debug;

use crate::buffer::PixelBuffer;

/// Rotate an image by 180 degrees.
///
/// Total over all buffers, including empty ones, and its own inverse.
pub fn rotate180(image: &PixelBuffer) -> PixelBuffer {
    let pixels: Vec<_> = image.pixels().iter().rev().copied().collect();

    debug!(dimensions = ?image.dimensions(), "rotated image 180 degrees");

    PixelBuffer::from_raw_parts(image.width(), image.height(), pixels)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::color::PackedColor;
    use proptest::prelude::*;

    fn buffer_strategy() -> impl Strategy<Value = PixelBuffer> {
        (0usize..=24, 0usize..=24).prop_flat_map(|(width, height)| {
            prop::collection::vec(any::<u32>().prop_map(PackedColor::from), width * height)
                .prop_map(move |pixels| PixelBuffer::new(width, height, pixels).unwrap())
        })
    }

    proptest! {
        /// Property: Rotating twice returns the original image.
        #[test]
        fn prop_rotate_twice_is_identity(img in buffer_strategy()) {
            prop_assert_eq!(rotate180(&rotate180(&img)), img);
        }

        /// Property: Every output pixel mirrors the input through the centre.
        #[test]
        fn prop_rotate_element_mapping(img in buffer_strategy()) {
            let (height, width) = img.dimensions();
            let result = rotate180(&img);

            for i in 0..height {
                for j in 0..width {
                    prop_assert_eq!(result.get(i, j), img.get(height - 1 - i, width - 1 - j));
                }
            }
        }
    }
}
