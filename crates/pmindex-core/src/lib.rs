use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub mod backend;
pub mod config_file;
pub mod mock;
pub mod registry;

// Re-export for convenience
pub use backend::{BackendError, LayoutElement, PageLayout, PdfBackend};
pub use config_file::ConfigError;
pub use registry::{DEFAULT_OUTPUT, DocumentEntry, Registry};

/// Hard cap on the length of a page title, in characters.
pub const MAX_TITLE_CHARS: usize = 120;

/// One indexed page of a standard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    pub standard: String,
    /// 1-based position of the page within its document.
    pub page: usize,
    pub title: String,
    /// Normalized, non-blank lines joined with `\n`.
    pub content: String,
}

impl PageRecord {
    /// Build a record, clamping `title` to [`MAX_TITLE_CHARS`].
    pub fn new(
        standard: impl Into<String>,
        page: usize,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        let mut title = title.into();
        if let Some((cut, _)) = title.char_indices().nth(MAX_TITLE_CHARS) {
            title.truncate(cut);
        }
        Self {
            standard: standard.into(),
            page,
            title,
            content: content.into(),
        }
    }
}

/// The serialized output: every page record of every indexed standard.
///
/// Append-only while the run is in progress; written out exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDocument {
    items: Vec<PageRecord>,
}

impl IndexDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the records of one document, keeping their order.
    pub fn push_all(&mut self, records: impl IntoIterator<Item = PageRecord>) {
        self.items.extend(records);
    }

    pub fn items(&self) -> &[PageRecord] {
        &self.items
    }

    pub fn into_items(self) -> Vec<PageRecord> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Immutable settings for one indexing run.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Directory that relative document and output paths resolve against.
    pub root: PathBuf,
    pub registry: Registry,
    pub output_path: PathBuf,
}

impl IndexConfig {
    /// Built-in registry and `data/unique_index.json`, both under `root`.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            registry: Registry::default_for_root(&root),
            output_path: root.join(DEFAULT_OUTPUT),
            root,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_record_clamps_long_title() {
        let long = "x".repeat(300);
        let rec = PageRecord::new("ISO", 1, long, "");
        assert_eq!(rec.title.chars().count(), MAX_TITLE_CHARS);
    }

    #[test]
    fn page_record_clamps_on_char_boundary() {
        let long = "é".repeat(130);
        let rec = PageRecord::new("ISO", 1, long, "");
        assert_eq!(rec.title.chars().count(), MAX_TITLE_CHARS);
        assert!(rec.title.chars().all(|c| c == 'é'));
    }

    #[test]
    fn index_document_serializes_items_key() {
        let mut doc = IndexDocument::new();
        doc.push_all([PageRecord::new("PMBOK7", 1, "Scope", "Scope\nbody")]);
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["items"][0]["standard"], "PMBOK7");
        assert_eq!(json["items"][0]["page"], 1);
        assert_eq!(json["items"][0]["title"], "Scope");
        assert_eq!(json["items"][0]["content"], "Scope\nbody");
    }

    #[test]
    fn index_config_defaults_output_under_root() {
        let cfg = IndexConfig::for_root("/srv/standards");
        assert_eq!(
            cfg.output_path,
            PathBuf::from("/srv/standards/data/unique_index.json")
        );
        assert_eq!(cfg.registry.len(), 4);
    }
}
