use std::path::Path;

use thiserror::Error;

pub mod config;
pub mod extractor;
pub mod text_processing;
pub mod title;

pub use config::{ParsingConfig, ParsingConfigBuilder};
pub use extractor::{PageIndexer, extract_page_text, flatten_page};
pub use text_processing::{clean_lines, normalize_line};
pub use title::choose_title;
// Re-export domain types from core (canonical definitions live there)
pub use pmindex_core::{BackendError, LayoutElement, PageLayout, PageRecord, PdfBackend};

#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("backend error: {0}")]
    Backend(#[from] pmindex_core::BackendError),
    #[error("invalid parsing config: {0}")]
    InvalidConfig(String),
}

/// Index every page of a PDF file using the given backend for layout analysis.
///
/// Pipeline:
/// 1. Decompose the PDF into per-page layout trees via `backend`
/// 2. Flatten each page's text lines in reading order
/// 3. Normalize lines and drop blank ones
/// 4. Pick a title per page and number pages from 1
pub fn index_document(
    pdf_path: &Path,
    standard: &str,
    backend: &dyn PdfBackend,
) -> Result<Vec<PageRecord>, ParsingError> {
    PageIndexer::new().index_document(pdf_path, standard, backend)
}
