//! Raster decoding with the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::{ImageError, ImageReader, RgbaImage};
use tracing::debug;

use super::{fetch_bytes, DecodeError, FetchOptions, ImageSource};
use crate::buffer::PixelBuffer;
use crate::color::PackedColor;

/// Decode an image from a file or URL.
///
/// # Errors
///
/// Returns `DecodeError::Io` for unreadable files, `DecodeError::Network`
/// for failed downloads, and `DecodeError::InvalidFormat` or
/// `DecodeError::CorruptedFile` when the bytes do not decode.
pub fn decode(source: &ImageSource, options: &FetchOptions) -> Result<PixelBuffer, DecodeError> {
    match source {
        ImageSource::File(path) => decode_file(path),
        ImageSource::Url(url) => {
            let bytes = fetch_bytes(url, options)?;
            decode_bytes(&bytes)
        }
    }
}

/// Decode an image file from disk.
///
/// The format is guessed from the file contents rather than its extension.
pub fn decode_file(path: &Path) -> Result<PixelBuffer, DecodeError> {
    let io_error = |source| DecodeError::Io {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(io_error)?
        .with_guessed_format()
        .map_err(io_error)?;

    let img = reader.decode().map_err(map_image_error)?;
    debug!(path = %path.display(), width = img.width(), height = img.height(), "decoded file");

    Ok(buffer_from_rgba_image(&img.into_rgba8()))
}

/// Decode an in-memory encoded image.
pub fn decode_bytes(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = reader.decode().map_err(map_image_error)?;
    debug!(bytes = bytes.len(), width = img.width(), height = img.height(), "decoded bytes");

    Ok(buffer_from_rgba_image(&img.into_rgba8()))
}

/// Convert an RGBA image into packed colors.
///
/// `buffer[row][col]` holds the pixel at `x = col, y = row`.
pub fn buffer_from_rgba_image(img: &RgbaImage) -> PixelBuffer {
    let (width, height) = img.dimensions();
    let pixels = img
        .pixels()
        .map(|px| {
            let [r, g, b, a] = px.0;
            PackedColor::pack(r, g, b, a)
        })
        .collect();

    PixelBuffer::from_raw_parts(width as usize, height as usize, pixels)
}

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    }
}
