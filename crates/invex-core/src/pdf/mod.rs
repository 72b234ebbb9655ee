//! PDF processing module.

mod renderer;

pub use renderer::PdfTextRenderer;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for turning PDF bytes into the plain text of their first page.
pub trait PageRenderer {
    /// Render the first page of the document to plain text. Later pages are
    /// ignored.
    fn render_first_page(&self, data: &[u8]) -> Result<String>;

    /// Short name of the rendering backend, for logs.
    fn backend_name(&self) -> &str;
}
