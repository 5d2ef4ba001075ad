//! Top-left corner sampling for debugging.
//!
//! Prints a small block of raw packed values next to their unpacked
//! channels, which is usually enough to confirm that decoding and channel
//! order are right.

use std::fmt;

use crate::buffer::PixelBuffer;
use crate::color::{PackedColor, Rgba};

/// Side length of the default sample block.
pub const DEFAULT_SAMPLE_SIZE: usize = 3;

/// A square block copied from the top-left corner of an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CornerSample {
    rows: Vec<Vec<PackedColor>>,
}

impl CornerSample {
    /// Raw packed colors, row by row.
    pub fn packed(&self) -> &[Vec<PackedColor>] {
        &self.rows
    }

    /// Unpacked channels, row by row.
    pub fn channels(&self) -> Vec<Vec<Rgba>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|px| px.unpack()).collect())
            .collect()
    }

    /// Side length of the block.
    pub fn size(&self) -> usize {
        self.rows.len()
    }
}

/// Copy the top-left `size x size` block.
///
/// Returns `None` unless both dimensions are strictly greater than `size`.
pub fn corner_sample(image: &PixelBuffer, size: usize) -> Option<CornerSample> {
    if image.height() <= size || image.width() <= size {
        return None;
    }

    let rows = image
        .rows()
        .take(size)
        .map(|row| row[..size].to_vec())
        .collect();
    Some(CornerSample { rows })
}

impl fmt::Display for CornerSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Raw pixel data from the top left corner:")?;
        for row in &self.rows {
            let values: Vec<String> = row.iter().map(|px| (px.to_u32() as i32).to_string()).collect();
            writeln!(f, "[{}]", values.join(", "))?;
        }

        writeln!(f)?;
        writeln!(f, "Extracted RGBA pixel data from top left corner:")?;
        for row in self.channels() {
            let values: Vec<String> = row.iter().map(Rgba::to_string).collect();
            writeln!(f, "[{}]", values.join(", "))?;
        }
        Ok(())
    }
}
