//! Document-level overlay removal using lopdf

use std::path::PathBuf;
use lopdf::{Document, Object, ObjectId};
use tracing::{debug, info, warn};
use crate::error::{Error, Result};
use crate::filter::strip_black_rectangles_bytes;

/// Options for revealing a PDF
#[derive(Debug, Clone)]
pub struct RevealOptions {
    /// Input PDF file path
    pub input_path: PathBuf,
    /// Output PDF file path
    pub output_path: PathBuf,
    /// Compress streams when saving
    pub compress: bool,
}

impl RevealOptions {
    /// Options with stream compression enabled
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            compress: true,
        }
    }
}

/// What happened on one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageReport {
    /// 1-based page number
    pub page_number: u32,
    /// Content streams inspected
    pub streams_scanned: usize,
    /// Content streams that were rewritten
    pub streams_modified: usize,
    /// Rectangles removed from this page
    pub removed: usize,
}

/// What happened across the whole document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealReport {
    /// Per-page results, in page order
    pub pages: Vec<PageReport>,
}

impl RevealReport {
    /// Total number of rectangles removed
    pub fn removed_total(&self) -> usize {
        self.pages.iter().map(|p| p.removed).sum()
    }

    /// Total number of content streams rewritten
    pub fn streams_modified(&self) -> usize {
        self.pages.iter().map(|p| p.streams_modified).sum()
    }
}

/// Remove black rectangle overlays from a PDF file and save the result
///
/// Loads the input, filters every content stream of every page, writes back
/// only the streams that changed, then drops unreferenced objects and saves.
///
/// # Example
///
/// ```no_run
/// use pdf_reveal::pdf::{reveal_pdf, RevealOptions};
///
/// let options = RevealOptions::new("redacted.pdf", "revealed.pdf");
/// let report = reveal_pdf(&options).expect("Failed to reveal PDF");
/// println!("Removed {} overlays", report.removed_total());
/// ```
pub fn reveal_pdf(options: &RevealOptions) -> Result<RevealReport> {
    if !options.input_path.exists() {
        return Err(Error::FileNotFound(options.input_path.clone()));
    }

    let mut doc = Document::load(&options.input_path)?;

    let report = reveal_document(&mut doc)?;

    doc.prune_objects();
    if options.compress {
        doc.compress();
    }
    doc.save(&options.output_path)?;

    info!(
        "Removed {} overlays from {} streams, saved {}",
        report.removed_total(),
        report.streams_modified(),
        options.output_path.display()
    );

    Ok(report)
}

/// Remove black rectangle overlays from an in-memory document
///
/// Content streams are decoded through their `/Filter` chain. A stream that
/// cannot be decoded is left untouched and not counted as scanned.
pub fn reveal_document(doc: &mut Document) -> Result<RevealReport> {
    // Collect page info first (to avoid borrow issues)
    let pages: Vec<(u32, ObjectId)> = doc.get_pages().into_iter().collect();

    let mut report = RevealReport::default();

    for (page_number, page_id) in pages {
        let mut page_report = PageReport {
            page_number,
            ..Default::default()
        };

        for content_id in doc.get_page_contents(page_id) {
            let removed = match reveal_stream(doc, content_id)? {
                Some(removed) => removed,
                None => continue,
            };

            page_report.streams_scanned += 1;
            if removed > 0 {
                debug!(
                    "Page {}: removed {} overlays from stream {:?}",
                    page_number, removed, content_id
                );
                page_report.streams_modified += 1;
                page_report.removed += removed;
            }
        }

        report.pages.push(page_report);
    }

    Ok(report)
}

/// Filter one content stream in place, returning how many rectangles it lost
///
/// `None` when the object is not a stream or its filters cannot be decoded.
/// The stream is only replaced when something was removed, and is then
/// stored unfiltered.
fn reveal_stream(doc: &mut Document, content_id: ObjectId) -> Result<Option<usize>> {
    let stream = match doc.get_object_mut(content_id) {
        Ok(Object::Stream(stream)) => stream,
        _ => {
            warn!("Content {:?} is not a stream, skipping", content_id);
            return Ok(None);
        }
    };

    let content = match stream.get_plain_content() {
        Ok(content) => content,
        Err(e) => {
            warn!("Cannot decode content stream {:?}, skipping: {}", content_id, e);
            return Ok(None);
        }
    };

    let (filtered, removed) = strip_black_rectangles_bytes(&content)?;
    if removed > 0 {
        stream.set_plain_content(filtered);
    }

    Ok(Some(removed))
}
