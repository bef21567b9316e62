//! Filesystem-backed dataset store.

use std::path::PathBuf;

use log::warn;

use super::DatasetStore;

/// Institution dataset read on demand from a `domains/` directory tree.
///
/// Each lookup stats one file: the label path `["uk", "ac", "strath"]`
/// becomes `<root>/uk/ac/strath.txt`. Useful when the dataset is large or
/// updated out of band; the in-memory store is otherwise preferable.
///
/// An unreadable file degrades to "no entry" with a warning so that a single
/// bad file never fails a classification call.
#[derive(Debug, Clone)]
pub struct FsDataset {
    root: PathBuf,
}

impl FsDataset {
    /// Creates a store rooted at `root` (the directory holding the TLD
    /// subdirectories). The directory is not required to exist yet; missing
    /// paths simply resolve to no entry.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DatasetStore for FsDataset {
    fn read(&self, path: &[&str]) -> Option<String> {
        // Labels become path components; refuse anything that could escape
        // the dataset root.
        if path
            .iter()
            .any(|l| l.is_empty() || l.contains(['/', '\\']) || *l == "..")
        {
            return None;
        }

        let mut file = self.root.clone();
        for label in path {
            file.push(label);
        }
        file.set_extension("txt");

        if !file.is_file() {
            return None;
        }
        match std::fs::read_to_string(&file) {
            Ok(content) => Some(content),
            Err(err) => {
                warn!("treating unreadable dataset file {} as absent: {err}", file.display());
                None
            }
        }
    }
}
