//! Byte-preserving text bridge for content streams
//!
//! Every byte value maps to the `char` with the same code point (ISO-8859-1),
//! so decoding and re-encoding a stream round-trips its bytes exactly.

use crate::error::{Error, Result};

/// Decode raw stream bytes into text, one char per byte
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Encode text back into raw stream bytes
///
/// Fails on any char above U+00FF rather than substituting it.
pub fn encode(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .map(|c| u8::try_from(c).map_err(|_| Error::NotLatin1(c)))
        .collect()
}
