use std::path::Path;

use pmindex_core::{LayoutElement, PageLayout, PageRecord, PdfBackend};

use crate::ParsingError;
use crate::config::ParsingConfig;
use crate::text_processing::clean_lines;
use crate::title::choose_title_with_config;

/// Flatten one page's layout into text.
///
/// Only text lines directly inside text containers contribute, in the
/// order the backend yielded them. Empty lines are skipped and trailing
/// newlines stripped; nothing else is touched.
pub fn flatten_page(layout: &PageLayout) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for element in &layout.elements {
        let LayoutElement::TextContainer(children) = element else {
            continue;
        };
        for child in children {
            if let LayoutElement::TextLine(text) = child
                && !text.is_empty()
            {
                lines.push(text.trim_end_matches('\n'));
            }
        }
    }
    lines.join("\n")
}

/// Extract one text block per physical page. Backend errors propagate.
pub fn extract_page_text(
    backend: &dyn PdfBackend,
    path: &Path,
) -> Result<Vec<String>, ParsingError> {
    let layouts = backend.page_layouts(path)?;
    Ok(layouts.iter().map(flatten_page).collect())
}

/// Turns extracted page text into [`PageRecord`]s.
///
/// The default constructor uses the built-in title bounds; use
/// [`PageIndexer::with_config`] to supply custom ones.
pub struct PageIndexer {
    config: ParsingConfig,
}

impl Default for PageIndexer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageIndexer {
    pub fn new() -> Self {
        Self {
            config: ParsingConfig::default(),
        }
    }

    pub fn with_config(config: ParsingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParsingConfig {
        &self.config
    }

    /// Build the record for a single page.
    pub fn index_page(&self, page_text: &str, standard: &str, page: usize) -> PageRecord {
        let lines = clean_lines(page_text);
        let title = choose_title_with_config(&lines, &self.config);
        PageRecord::new(standard, page, title, lines.join("\n"))
    }

    /// Build records for already-extracted pages, numbering them from 1.
    pub fn index_pages<S: AsRef<str>>(&self, pages: &[S], standard: &str) -> Vec<PageRecord> {
        pages
            .iter()
            .enumerate()
            .map(|(i, text)| self.index_page(text.as_ref(), standard, i + 1))
            .collect()
    }

    /// Run the full pipeline on a PDF file.
    pub fn index_document(
        &self,
        pdf_path: &Path,
        standard: &str,
        backend: &dyn PdfBackend,
    ) -> Result<Vec<PageRecord>, ParsingError> {
        let pages = extract_page_text(backend, pdf_path)?;
        tracing::debug!(
            path = %pdf_path.display(),
            standard,
            pages = pages.len(),
            "extracted page text"
        );
        Ok(self.index_pages(&pages, standard))
    }
}
