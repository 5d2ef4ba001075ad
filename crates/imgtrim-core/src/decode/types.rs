//! Core types for image decoding.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The local file could not be opened or read.
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Downloading a remote image failed.
    #[error("Network error: {0}")]
    Network(String),
}

/// Where an image is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Path on the local filesystem.
    File(PathBuf),
    /// `http://` or `https://` URL.
    Url(String),
}

impl ImageSource {
    /// Classify a user-supplied location.
    ///
    /// Strings whose scheme is `http` or `https`, compared without regard to
    /// case, become [`ImageSource::Url`]; everything else is a file path.
    pub fn parse(location: &str) -> Self {
        if has_http_scheme(location) {
            ImageSource::Url(location.to_string())
        } else {
            ImageSource::File(PathBuf::from(location))
        }
    }

    /// Check if the source needs the network.
    pub fn is_remote(&self) -> bool {
        matches!(self, ImageSource::Url(_))
    }
}

fn has_http_scheme(location: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        location
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

impl From<&Path> for ImageSource {
    fn from(path: &Path) -> Self {
        ImageSource::File(path.to_path_buf())
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::File(path) => write!(f, "{}", path.display()),
            ImageSource::Url(url) => f.write_str(url),
        }
    }
}

/// Settings for downloading remote images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Whole-request timeout.
    pub timeout: Duration,
    /// User agent sent with each request.
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("imgtrim/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
