//! PDF Reveal Library
//!
//! Removes black rectangles painted over text in PDF content streams, leaving
//! the text operators in place so the hidden text shows again.
//! This library provides functionality to:
//! - Filter a single content stream ([`filter::strip_black_rectangles`])
//! - Filter every content stream of a document and save it ([`pdf::reveal_pdf`])
//!
//! # Example
//!
//! ```no_run
//! use pdf_reveal::pdf::{reveal_pdf, RevealOptions};
//!
//! let options = RevealOptions::new("redacted.pdf", "revealed.pdf");
//!
//! let report = reveal_pdf(&options).expect("Failed to reveal PDF");
//! println!("Removed {} overlays", report.removed_total());
//! ```

pub mod error;
pub mod filter;
pub mod latin1;
pub mod pdf;

// Re-export commonly used items
pub use error::{Error, Result};
