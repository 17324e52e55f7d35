//! Error types for the pdf-reveal library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the pdf-reveal library
///
/// The stream filter itself never fails; these cover document I/O and the
/// byte/text bridge.
#[derive(Error, Debug)]
pub enum Error {
    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Character outside the single-byte range while re-encoding a stream
    #[error("Character {0:?} cannot be encoded as a single byte")]
    NotLatin1(char),
}
