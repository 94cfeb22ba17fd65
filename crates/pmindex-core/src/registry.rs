use std::path::{Path, PathBuf};

/// Output location relative to the project root.
pub const DEFAULT_OUTPUT: &str = "data/unique_index.json";

/// Built-in standards: file name under the project root, and its label.
const DEFAULT_DOCUMENTS: &[(&str, &str)] = &[
    ("pmbok.pdf", "PMBOK7"),
    ("prince2.pdf", "PRINCE2"),
    ("ISO.pdf", "ISO"),
    ("PM_standards_comparison.pdf", "COMPARISON"),
];

/// A standard to index: where its PDF lives and what to call it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    pub path: PathBuf,
    pub standard: String,
}

impl DocumentEntry {
    pub fn new(path: impl Into<PathBuf>, standard: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            standard: standard.into(),
        }
    }
}

/// Ordered mapping from document path to standard name.
///
/// Performs no existence checks; callers decide what to do with a path
/// that is not on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<DocumentEntry>,
}

impl Registry {
    pub fn new(entries: Vec<DocumentEntry>) -> Self {
        Self { entries }
    }

    /// The four built-in standards, resolved against `root`.
    pub fn default_for_root(root: &Path) -> Self {
        Self::new(
            DEFAULT_DOCUMENTS
                .iter()
                .map(|(file, standard)| DocumentEntry::new(root.join(file), *standard))
                .collect(),
        )
    }

    /// Build a registry from `(path, standard)` pairs, resolving relative
    /// paths against `root`.
    pub fn from_pairs<I, P, S>(root: &Path, pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, S)>,
        P: AsRef<Path>,
        S: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(p, s)| DocumentEntry::new(root.join(p.as_ref()), s))
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a DocumentEntry;
    type IntoIter = std::slice::Iter<'a, DocumentEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_order_and_labels() {
        let reg = Registry::default_for_root(Path::new("/proj"));
        let labels: Vec<&str> = reg.iter().map(|e| e.standard.as_str()).collect();
        assert_eq!(labels, ["PMBOK7", "PRINCE2", "ISO", "COMPARISON"]);
        assert_eq!(
            reg.iter().next().unwrap().path,
            PathBuf::from("/proj/pmbok.pdf")
        );
    }

    #[test]
    fn from_pairs_keeps_absolute_paths() {
        let reg = Registry::from_pairs(
            Path::new("/proj"),
            [("/abs/a.pdf", "A"), ("rel/b.pdf", "B")],
        );
        let paths: Vec<&Path> = reg.iter().map(|e| e.path.as_path()).collect();
        assert_eq!(paths, [Path::new("/abs/a.pdf"), Path::new("/proj/rel/b.pdf")]);
    }

    #[test]
    fn registry_does_not_check_existence() {
        let reg = Registry::default_for_root(Path::new("/definitely/not/here"));
        assert_eq!(reg.len(), 4);
    }
}
