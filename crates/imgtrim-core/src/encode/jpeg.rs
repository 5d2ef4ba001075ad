//! JPEG encoding for output files.
//!
//! Uses the `image` crate's JPEG encoder with a configurable quality.

use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;
use tracing::info;

use crate::buffer::PixelBuffer;

/// Quality used when the caller has no preference.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: usize, height: usize },

    /// Dimensions exceed what the encoder accepts
    #[error("Image too large to encode: {width}x{height}")]
    TooLarge { width: usize, height: usize },

    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),

    /// Writing the output file failed
    #[error("Cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Flatten a buffer to RGB bytes, three per pixel, dropping alpha.
pub fn rgb_bytes(image: &PixelBuffer) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(image.pixel_count() * 3);
    for px in image.pixels() {
        let rgba = px.unpack();
        bytes.extend_from_slice(&[rgba.r, rgba.g, rgba.b]);
    }
    bytes
}

/// Encode a pixel buffer to JPEG bytes.
///
/// # Arguments
///
/// * `image` - Image to encode; alpha is ignored
/// * `quality` - JPEG quality, clamped to 1-100
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for empty images,
/// `EncodeError::TooLarge` past the JPEG size limit and
/// `EncodeError::EncodingFailed` if the encoder rejects the data.
pub fn encode_jpeg(image: &PixelBuffer, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let (height, width) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    // The JPEG format itself caps each side at 65535
    let (Ok(enc_width), Ok(enc_height)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(EncodeError::TooLarge { width, height });
    };

    let quality = quality.clamp(1, 100);
    let mut buffer = Cursor::new(Vec::new());

    JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(
            &rgb_bytes(image),
            u32::from(enc_width),
            u32::from(enc_height),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode a pixel buffer and write it to `path` as JPEG.
///
/// Nothing is created on disk if encoding fails. A failed write may leave
/// a partial file behind.
pub fn write_jpeg(image: &PixelBuffer, path: &Path, quality: u8) -> Result<(), EncodeError> {
    let bytes = encode_jpeg(image, quality)?;

    let io_error = |source| EncodeError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    writer.write_all(&bytes).map_err(io_error)?;
    writer.flush().map_err(io_error)?;

    info!(path = %path.display(), bytes = bytes.len(), "wrote JPEG");
    Ok(())
}
