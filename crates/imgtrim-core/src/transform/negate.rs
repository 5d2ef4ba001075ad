//! Color negation.

use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::color::{PackedColor, Rgba};

/// Invert the red, green and blue channels of one color, keeping alpha.
#[inline]
pub fn negate_color(color: PackedColor) -> PackedColor {
    let Rgba { r, g, b, a } = color.unpack();
    PackedColor::pack(255 - r, 255 - g, 255 - b, a)
}

/// Produce the color negative of an image.
///
/// Each channel `c` of red, green and blue becomes `255 - c`; alpha is
/// carried over unchanged. Applying it twice restores the input.
pub fn negate(image: &PixelBuffer) -> PixelBuffer {
    let pixels = image.pixels().iter().copied().map(negate_color).collect();

    debug!(dimensions = ?image.dimensions(), "negated image");

    PixelBuffer::from_raw_parts(image.width(), image.height(), pixels)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
