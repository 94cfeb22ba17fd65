use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod writer;

// Re-export domain types for convenience
pub use pmindex_core::{DocumentEntry, IndexConfig, IndexDocument, PageRecord, Registry};
pub use pmindex_parsing::{PageIndexer, ParsingConfig};
pub use writer::write_index;

use pmindex_core::PdfBackend;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("failed to index {path}: {source}")]
    Parsing {
        path: PathBuf,
        #[source]
        source: pmindex_parsing::ParsingError,
    },
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize index: {0}")]
    Json(#[from] serde_json::Error),
}

/// Progress events emitted while walking the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEvent {
    /// The document is not on disk and will be skipped.
    Missing { path: PathBuf, standard: String },
    /// Extraction of the document is starting.
    Indexing { path: PathBuf, standard: String },
    /// The document produced `pages` records.
    Indexed { standard: String, pages: usize },
}

/// Outcome of a complete [`run_index`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    pub output_path: PathBuf,
    pub total_items: usize,
    pub documents_indexed: usize,
    pub documents_missing: usize,
}

/// Index every registered document that exists on disk.
///
/// Records are appended in registry order, then page order. Missing files
/// are reported through `progress` and skipped; any extraction error aborts
/// the whole run.
pub fn build_index(
    config: &IndexConfig,
    indexer: &PageIndexer,
    backend: &dyn PdfBackend,
    mut progress: impl FnMut(&IndexEvent),
) -> Result<IndexDocument, IngestError> {
    let mut index = IndexDocument::new();

    for entry in &config.registry {
        if !entry.path.exists() {
            tracing::debug!(path = %entry.path.display(), standard = %entry.standard, "missing PDF");
            progress(&IndexEvent::Missing {
                path: entry.path.clone(),
                standard: entry.standard.clone(),
            });
            continue;
        }

        progress(&IndexEvent::Indexing {
            path: entry.path.clone(),
            standard: entry.standard.clone(),
        });
        let records = indexer
            .index_document(&entry.path, &entry.standard, backend)
            .map_err(|source| IngestError::Parsing {
                path: entry.path.clone(),
                source,
            })?;
        let pages = records.len();
        index.push_all(records);
        progress(&IndexEvent::Indexed {
            standard: entry.standard.clone(),
            pages,
        });
    }

    Ok(index)
}

/// Build the index and write it to `config.output_path`.
///
/// Nothing is written unless every document was indexed successfully.
pub fn run_index(
    config: &IndexConfig,
    indexer: &PageIndexer,
    backend: &dyn PdfBackend,
    mut progress: impl FnMut(&IndexEvent),
) -> Result<IndexSummary, IngestError> {
    let mut documents_indexed = 0;
    let mut documents_missing = 0;
    let index = build_index(config, indexer, backend, |event| {
        match event {
            IndexEvent::Missing { .. } => documents_missing += 1,
            IndexEvent::Indexed { .. } => documents_indexed += 1,
            IndexEvent::Indexing { .. } => {}
        }
        progress(event);
    })?;

    write_index(&index, &config.output_path)?;

    Ok(IndexSummary {
        output_path: config.output_path.clone(),
        total_items: index.len(),
        documents_indexed,
        documents_missing,
    })
}

/// Run the pipeline with the MuPDF backend.
#[cfg(feature = "pdf")]
pub fn run_default_index(
    config: &IndexConfig,
    indexer: &PageIndexer,
    progress: impl FnMut(&IndexEvent),
) -> Result<IndexSummary, IngestError> {
    let backend = pmindex_pdf_mupdf::MupdfBackend::new();
    run_index(config, indexer, &backend, progress)
}

/// Whether each registered document is present, in registry order.
pub fn document_status(registry: &Registry) -> Vec<(&DocumentEntry, bool)> {
    registry.iter().map(|e| (e, e.path.exists())).collect()
}

/// Display name for a document path: its file name, or the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
