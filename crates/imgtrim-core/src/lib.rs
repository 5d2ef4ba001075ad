//! imgtrim core - pixel buffer transforms and image I/O
//!
//! This crate loads a raster image into a grid of packed ARGB colors,
//! runs it through pure transforms, and writes the result as JPEG.
//!
//! # Module Structure
//!
//! - `color` - Packing and unpacking of ARGB channels
//! - `buffer` - Row-major pixel grid
//! - `transform` - Trim, 180-degree rotation, negation and pipelines
//! - `decode` - File and URL decoding into pixel buffers
//! - `encode` - JPEG encoding and file output
//! - `inspect` - Corner sampling for debugging

pub mod buffer;
pub mod color;
pub mod decode;
pub mod encode;
pub mod inspect;
pub mod transform;

pub use buffer::{BufferError, PixelBuffer};
pub use color::{ColorError, PackedColor, Rgba};
pub use decode::{decode, DecodeError, FetchOptions, ImageSource};
pub use encode::{encode_jpeg, write_jpeg, EncodeError, DEFAULT_JPEG_QUALITY};
pub use inspect::{corner_sample, CornerSample};
pub use transform::{
    negate, rotate180, trim, trim_or_keep, Pipeline, Transform, TransformError, TrimPolicy,
};
