//! Pixel buffer transforms: trimming, rotation and negation.
//!
//! Every transform borrows its input and allocates a new [`PixelBuffer`](crate::buffer::PixelBuffer),
//! so stages compose by plain function application:
//!
//! ```ignore
//! let out = negate(&rotate180(&trim(&image, 50)?));
//! ```
//!
//! [`Pipeline`] records such a sequence as data so it can be built up
//! front and applied to any number of images.
//!
//! # Coordinate System
//!
//! - `(row, col)` indexing, row-major
//! - Origin is the top-left corner

mod negate;
mod pipeline;
mod rotate;
mod trim;

use thiserror::Error;

pub use negate::{negate, negate_color};
pub use pipeline::{Pipeline, Transform, TrimPolicy};
pub use rotate::rotate180;
pub use trim::{trim, trim_or_keep};

/// Errors raised by transforms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Trimming would remove the whole image.
    #[error("Cannot trim {margin} pixels from a {width}x{height} image")]
    MarginTooLarge {
        margin: usize,
        width: usize,
        height: usize,
    },
}
