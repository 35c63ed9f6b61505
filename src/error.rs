//! Error kinds surfaced at the pipeline boundary.
//!
//! The numeric stages themselves are total functions; errors only arise from
//! file I/O, image decoding, and malformed input arrays handed to
//! [`crate::detect_edges`].
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Input path does not exist on disk.
    #[error("file not found: {0}")]
    NotFound(PathBuf),

    /// The file exists but could not be decoded as an image.
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Encoding or writing an output image failed.
    #[error("failed to save {path}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Filesystem error (directory creation, reads, writes).
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON serialization of a report or config failed.
    #[error("json error for {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Precondition violation: empty array, non-finite samples, or bad
    /// detector parameters.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
