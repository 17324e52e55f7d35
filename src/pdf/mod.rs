//! PDF document handling

pub mod reveal;

// Re-export commonly used items
pub use reveal::{reveal_document, reveal_pdf, PageReport, RevealOptions, RevealReport};
