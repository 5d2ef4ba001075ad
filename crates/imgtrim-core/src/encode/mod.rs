//! Image encoding from pixel buffers.
//!
//! This module provides functionality for:
//! - Encoding a [`PixelBuffer`](crate::buffer::PixelBuffer) to JPEG bytes
//! - Writing the JPEG to a file
//!
//! Output is always 24-bit RGB. Alpha is carried through the transforms but
//! dropped here, since JPEG has no alpha channel.
//!
//! # Examples
//!
//! ```ignore
//! use imgtrim_core::encode::{write_jpeg, DEFAULT_JPEG_QUALITY};
//!
//! write_jpeg(&image, Path::new("trimmed.jpg"), DEFAULT_JPEG_QUALITY)?;
//! ```

mod jpeg;

pub use jpeg::{encode_jpeg, rgb_bytes, write_jpeg, EncodeError, DEFAULT_JPEG_QUALITY};
