//! Row-major grid of packed colors.

use thiserror::Error;

use crate::color::PackedColor;

/// Errors from assembling a pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Flat pixel data does not cover `width * height` cells.
    #[error("Pixel data length mismatch: expected {expected} pixels (width * height), got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A row differs in length from the first row.
    #[error("Row {row} has {actual} pixels, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// A rectangular image held as packed ARGB colors.
///
/// Pixels are stored row-major: the pixel at `(row, col)` lives at index
/// `row * width + col`. The length invariant is checked on construction, so
/// every row has exactly `width` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<PackedColor>,
}

impl PixelBuffer {
    /// Wrap flat row-major pixel data.
    pub fn new(width: usize, height: usize, pixels: Vec<PackedColor>) -> Result<Self, BufferError> {
        let expected = width
            .checked_mul(height)
            .ok_or(BufferError::LengthMismatch {
                expected: usize::MAX,
                actual: pixels.len(),
            })?;
        if pixels.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap pixel data whose length the caller already guarantees.
    pub(crate) fn from_raw_parts(width: usize, height: usize, pixels: Vec<PackedColor>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width * height,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build from nested rows, rejecting ragged input.
    ///
    /// An empty outer vector yields a `0 x 0` buffer.
    pub fn from_rows(rows: Vec<Vec<PackedColor>>) -> Result<Self, BufferError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut pixels = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(BufferError::RaggedRows {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            pixels.extend(values);
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A buffer with every pixel set to `color`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn filled(width: usize, height: usize, color: PackedColor) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; cell_count(width, height)],
        }
    }

    /// Build by evaluating `f(row, col)` for every cell.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> PackedColor,
    ) -> Self {
        let mut pixels = Vec::with_capacity(cell_count(width, height));
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`, rows first.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Check if the buffer has no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<PackedColor> {
        if row < self.height && col < self.width {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    /// One row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    pub fn row(&self, row: usize) -> &[PackedColor] {
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[PackedColor]> + '_ {
        // chunks_exact(0) panics, so empty-width buffers map each row to an empty slice.
        let width = self.width;
        (0..self.height).map(move |row| &self.pixels[row * width..(row + 1) * width])
    }

    /// Flat row-major pixel data.
    pub fn pixels(&self) -> &[PackedColor] {
        &self.pixels
    }

    /// Consume the buffer, returning its flat pixel data.
    pub fn into_pixels(self) -> Vec<PackedColor> {
        self.pixels
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<PackedColor>> {
        self.rows().map(<[PackedColor]>::to_vec).collect()
    }
}

fn cell_count(width: usize, height: usize) -> usize {
    width
        .checked_mul(height)
        .unwrap_or_else(|| panic!("{width}x{height} pixel buffer overflows usize"))
}
