//! First-page text rendering using lopdf and pdf-extract.

use std::borrow::Cow;
use std::panic::{self, AssertUnwindSafe};

use lopdf::Document;
use tracing::{debug, trace, warn};

use super::{PageRenderer, Result};
use crate::error::PdfError;

/// Renders PDF pages to text.
///
/// `lopdf` validates the document, counts pages and cuts it down to the
/// first page; `pdf-extract` does the actual text layout. Later pages are
/// never handed to `pdf-extract`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextRenderer;

impl PdfTextRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self
    }

    /// Number of pages in the document.
    pub fn page_count(&self, data: &[u8]) -> Result<usize> {
        let (doc, _) = self.load(data)?;
        Ok(doc.get_pages().len())
    }

    /// Parse the document, decrypting it with the empty password when needed.
    ///
    /// Returns the document together with the bytes `pdf-extract` should read,
    /// which differ from the input only for decrypted documents.
    fn load<'a>(&self, data: &'a [u8]) -> Result<(Document, Cow<'a, [u8]>)> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        let raw = if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            Cow::Owned(decrypted)
        } else {
            Cow::Borrowed(data)
        };

        Ok((doc, raw))
    }

    /// Serialize a copy of `doc` holding only its first page.
    fn first_page_only(&self, mut doc: Document, page_count: usize) -> Result<Vec<u8>> {
        if page_count > 1 {
            let later: Vec<u32> = (2..=page_count as u32).collect();
            doc.delete_pages(&later);
            doc.prune_objects();
            debug!("Dropped {} later pages before rendering", later.len());
        }

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes)
            .map_err(|e| PdfError::Parse(format!("Failed to save first page: {}", e)))?;
        Ok(bytes)
    }
}

/// Run `pdf-extract` on a single-page document.
///
/// `pdf-extract` panics on some documents `lopdf` accepts (fonts missing from
/// the page resources, broken encodings); those come back as
/// `PdfError::TextExtraction`.
fn render_single_page(data: &[u8]) -> Result<String> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(data)
    }));

    let pages = match outcome {
        Ok(pages) => pages.map_err(|e| PdfError::TextExtraction(e.to_string()))?,
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            warn!("pdf-extract panicked: {}", reason);
            return Err(PdfError::TextExtraction(format!(
                "text layout failed: {}",
                reason
            )));
        }
    };

    pages.into_iter().next().ok_or(PdfError::NoPages)
}

impl PageRenderer for PdfTextRenderer {
    fn render_first_page(&self, data: &[u8]) -> Result<String> {
        let (doc, raw) = self.load(data)?;

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }
        debug!("Loaded PDF with {} pages", page_count);

        let first = if page_count == 1 {
            render_single_page(&raw)?
        } else {
            let single = self.first_page_only(doc, page_count)?;
            render_single_page(&single)?
        };
        trace!("First page rendered to {} chars", first.len());

        Ok(first)
    }

    fn backend_name(&self) -> &str {
        "pdf-extract"
    }
}
