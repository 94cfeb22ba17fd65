use std::path::Path;

use mupdf::{Document, TextPageFlags};

use pmindex_core::{BackendError, LayoutElement, PageLayout, PdfBackend};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island: it isolates the mupdf dependency
/// (which is AGPL-3.0) so that the indexing pipeline does not transitively
/// depend on it.
///
/// Each structured-text block becomes a [`LayoutElement::TextContainer`]
/// holding one [`LayoutElement::TextLine`] per line; blocks without lines
/// (images) become [`LayoutElement::Other`]. Blocks and lines keep the
/// order MuPDF reports them in.
#[derive(Debug, Default, Clone, Copy)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for MupdfBackend {
    fn page_layouts(&self, path: &Path) -> Result<Vec<PageLayout>, BackendError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::OpenError("invalid path encoding".into()))?;

        let document =
            Document::open(path_str).map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut layouts = Vec::new();

        for page_result in document
            .pages()
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?
        {
            let page = page_result.map_err(|e| BackendError::ExtractionError(e.to_string()))?;
            let text_page = page
                .to_text_page(TextPageFlags::empty())
                .map_err(|e| BackendError::ExtractionError(e.to_string()))?;

            let mut elements = Vec::new();
            for block in text_page.blocks() {
                let lines: Vec<LayoutElement> = block
                    .lines()
                    .map(|line| {
                        let mut text: String = line
                            .chars()
                            .map(|c| c.char().unwrap_or('\u{FFFD}'))
                            .collect();
                        text.push('\n');
                        LayoutElement::TextLine(text)
                    })
                    .collect();

                if lines.is_empty() {
                    elements.push(LayoutElement::Other);
                } else {
                    elements.push(LayoutElement::TextContainer(lines));
                }
            }
            layouts.push(PageLayout::new(elements));
        }

        tracing::debug!(path = %path.display(), pages = layouts.len(), "decomposed PDF");
        Ok(layouts)
    }
}
