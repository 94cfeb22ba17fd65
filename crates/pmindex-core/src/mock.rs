//! Mock PDF backend for testing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::backend::{BackendError, PageLayout, PdfBackend};

/// A configurable mock response for [`MockBackend`].
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Simulate a successfully decomposed document.
    Pages(Vec<PageLayout>),
    /// Simulate a corrupt or unreadable PDF.
    Error(String),
}

/// A hand-rolled mock implementing [`PdfBackend`] for tests.
///
/// Responses are keyed by path; a path with no registered response fails
/// with [`BackendError::OpenError`]. Every call is recorded in order.
#[derive(Default)]
pub struct MockBackend {
    responses: HashMap<PathBuf, MockResponse>,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the pages returned for `path`.
    pub fn with_pages(mut self, path: impl Into<PathBuf>, pages: Vec<PageLayout>) -> Self {
        self.responses
            .insert(path.into(), MockResponse::Pages(pages));
        self
    }

    /// Make extraction of `path` fail.
    pub fn with_error(mut self, path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        self.responses
            .insert(path.into(), MockResponse::Error(message.into()));
        self
    }

    /// Paths passed to [`PdfBackend::page_layouts`], in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }
}

impl PdfBackend for MockBackend {
    fn page_layouts(&self, path: &Path) -> Result<Vec<PageLayout>, BackendError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(path.to_path_buf());
        }
        match self.responses.get(path) {
            Some(MockResponse::Pages(pages)) => Ok(pages.clone()),
            Some(MockResponse::Error(msg)) => Err(BackendError::ExtractionError(msg.clone())),
            None => Err(BackendError::OpenError(format!(
                "no mock response for {}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutElement;

    #[test]
    fn records_calls_in_order() {
        let mock = MockBackend::new()
            .with_pages("a.pdf", vec![PageLayout::default()])
            .with_error("b.pdf", "corrupt xref");

        assert_eq!(mock.page_layouts(Path::new("a.pdf")).unwrap().len(), 1);
        assert!(matches!(
            mock.page_layouts(Path::new("b.pdf")),
            Err(BackendError::ExtractionError(_))
        ));
        assert!(matches!(
            mock.page_layouts(Path::new("c.pdf")),
            Err(BackendError::OpenError(_))
        ));
        assert_eq!(mock.call_count(), 3);
        assert_eq!(mock.calls()[1], PathBuf::from("b.pdf"));
    }

    #[test]
    fn returns_registered_layout() {
        let page = PageLayout::new(vec![LayoutElement::container(["Intro\n"])]);
        let mock = MockBackend::new().with_pages("a.pdf", vec![page.clone()]);
        assert_eq!(mock.page_layouts(Path::new("a.pdf")).unwrap(), vec![page]);
    }
}
