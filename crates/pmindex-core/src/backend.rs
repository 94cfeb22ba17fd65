use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A node in a page's layout tree, as reported by a [`PdfBackend`].
///
/// Only text containers and the text lines directly inside them carry
/// indexable text; everything else (figures, rules, stray glyphs) is `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutElement {
    TextContainer(Vec<LayoutElement>),
    /// Raw text of one line, possibly ending in `\n`.
    TextLine(String),
    Other,
}

impl LayoutElement {
    /// Convenience for a container holding only text lines.
    pub fn container<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LayoutElement::TextContainer(
            lines
                .into_iter()
                .map(|l| LayoutElement::TextLine(l.into()))
                .collect(),
        )
    }
}

/// Top-level layout elements of one physical page, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub elements: Vec<LayoutElement>,
}

impl PageLayout {
    pub fn new(elements: Vec<LayoutElement>) -> Self {
        Self { elements }
    }
}

/// Trait for PDF layout-analysis backends.
///
/// Implementors decompose a document into one [`PageLayout`] per physical
/// page; flattening the layout into text lives in
/// [`pmindex_parsing::extract_page_text`].
pub trait PdfBackend: Send + Sync {
    /// Decompose a PDF file into per-page layout trees, in page order.
    fn page_layouts(&self, path: &Path) -> Result<Vec<PageLayout>, BackendError>;
}
