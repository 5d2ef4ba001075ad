//! Image decoding into pixel buffers.
//!
//! This module provides functionality for:
//! - Telling local paths and HTTP(S) URLs apart ([`ImageSource`])
//! - Reading a local file or downloading a remote one
//! - Decoding any raster format the `image` crate is built with into a
//!   [`PixelBuffer`](crate::buffer::PixelBuffer) of packed ARGB colors
//!
//! # Architecture
//!
//! All operations are synchronous. File handles and HTTP responses are
//! owned by the function that opens them and dropped on every return path,
//! errors included.
//!
//! # Examples
//!
//! ```ignore
//! use imgtrim_core::decode::{decode, FetchOptions, ImageSource};
//!
//! let source = ImageSource::parse("./apple.jpg");
//! let image = decode(&source, &FetchOptions::default())?;
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```

mod fetch;
mod raster;
mod types;

pub use fetch::fetch_bytes;
pub use raster::{buffer_from_rgba_image, decode, decode_bytes, decode_file};
pub use types::{DecodeError, FetchOptions, ImageSource};
