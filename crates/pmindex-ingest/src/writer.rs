use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use pmindex_core::IndexDocument;
use tempfile::NamedTempFile;

use crate::IngestError;

/// Serialize `index` as pretty-printed JSON (2-space indent) at `path`.
///
/// The parent directory is created if needed. Output goes to a temp file in
/// the same directory and is renamed over `path` only once fully written,
/// so a failed run leaves any previous index untouched.
pub fn write_index(index: &IndexDocument, path: &Path) -> Result<(), IngestError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let io_err = |source: std::io::Error| IngestError::Io {
        path: dir.to_path_buf(),
        source,
    };

    fs::create_dir_all(dir).map_err(io_err)?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    // Temp files are created 0600; the index is meant to be served as-is.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(io_err)?;
    }
    {
        let mut w = BufWriter::new(tmp.as_file_mut());
        serde_json::to_writer_pretty(&mut w, index)?;
        w.flush().map_err(io_err)?;
    }
    tmp.persist(path).map_err(|e| IngestError::Io {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    tracing::info!(path = %path.display(), items = index.len(), "wrote index");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pmindex_core::PageRecord;

    fn sample() -> IndexDocument {
        let mut doc = IndexDocument::new();
        doc.push_all([
            PageRecord::new("PMBOK7", 1, "Stewardship", "Stewardship\nBe diligent"),
            PageRecord::new("ISO", 1, "Käyttöönotto – “Scope”", "Käyttöönotto – “Scope”"),
        ]);
        doc
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("data").join("unique_index.json");
        write_index(&sample(), &out).unwrap();
        assert!(out.exists());
    }

    #[test]
    fn pretty_prints_with_two_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("index.json");
        write_index(&sample(), &out).unwrap();
        let text = fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("{\n  \"items\": [\n    {\n      \"standard\": \"PMBOK7\""));
    }

    #[test]
    fn keeps_non_ascii_unescaped() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("index.json");
        write_index(&sample(), &out).unwrap();
        let text = fs::read_to_string(&out).unwrap();
        assert!(text.contains("Käyttöönotto – “Scope”"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn overwrites_previous_index() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("index.json");
        fs::write(&out, "stale").unwrap();
        write_index(&IndexDocument::new(), &out).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(parsed, serde_json::json!({ "items": [] }));
    }

    #[test]
    fn leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("index.json");
        write_index(&sample(), &out).unwrap();
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("index.json")]);
    }
}
