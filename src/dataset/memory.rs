//! In-memory trie-backed dataset store.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

use super::DatasetStore;

#[derive(Debug, Default)]
struct Node {
    value: Option<String>,
    children: HashMap<String, Node>,
}

/// Institution dataset preloaded into an in-memory trie.
///
/// Edges are domain labels ordered TLD-first; a node may carry an
/// institution name. Loading happens once at construction, so lookups are
/// pure map walks with no I/O on the classification path.
#[derive(Debug, Default)]
pub struct MemoryDataset {
    root: Node,
    len: usize,
}

impl MemoryDataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` at the domain `domain` (dotted, most specific label
    /// first, e.g. `"strath.ac.uk"`). An existing entry at the same domain is
    /// replaced.
    pub fn insert(&mut self, domain: &str, name: &str) {
        let mut node = &mut self.root;
        for label in domain.split('.').rev() {
            node = node.children.entry(label.to_string()).or_default();
        }
        if node.value.replace(name.trim().to_string()).is_none() {
            self.len += 1;
        }
    }

    /// Builds a dataset from `(domain, name)` pairs.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut dataset = Self::new();
        for (domain, name) in entries {
            dataset.insert(domain, name);
        }
        dataset
    }

    /// Loads a `domains/` directory tree (see the [module docs](super)).
    ///
    /// Each `.txt` file becomes one entry whose label path mirrors its
    /// position under `root` and whose name is the file's first line. Files
    /// without a `.txt` extension are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be listed or a `.txt` file
    /// cannot be read; a loader failure is a construction-time problem, not
    /// something to silently classify around.
    pub fn load_dir(root: &Path) -> Result<Self> {
        let mut dataset = Self::new();
        let mut path = Vec::new();
        load_level(root, &mut path, &mut dataset)?;
        Ok(dataset)
    }

    /// Loads a JSON object mapping dotted domains to institution names:
    /// `{"stanford.edu": "Stanford University", ...}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a JSON object
    /// of strings.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset file {}", path.display()))?;
        let entries: HashMap<String, String> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse dataset JSON {}", path.display()))?;

        let mut dataset = Self::new();
        for (domain, name) in &entries {
            dataset.insert(domain, name);
        }
        Ok(dataset)
    }

    /// Number of registered institutions.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no institution is registered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn load_level(dir: &Path, path: &mut Vec<String>, dataset: &mut MemoryDataset) -> Result<()> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read dataset directory {}", dir.display()))?;

    for entry in entries {
        let entry_path = entry
            .with_context(|| format!("failed to list dataset directory {}", dir.display()))?
            .path();
        let Some(stem) = entry_path.file_stem().and_then(|s| s.to_str()) else {
            warn!("skipping dataset entry with non-UTF-8 name: {}", entry_path.display());
            continue;
        };

        if entry_path.is_dir() {
            path.push(stem.to_string());
            load_level(&entry_path, path, dataset)?;
            path.pop();
        } else {
            if entry_path.extension().and_then(|e| e.to_str()) != Some("txt") {
                warn!("skipping non-.txt dataset file: {}", entry_path.display());
                continue;
            }
            let content = std::fs::read_to_string(&entry_path)
                .with_context(|| format!("failed to read {}", entry_path.display()))?;
            let name = content.lines().next().unwrap_or("").trim();
            if name.is_empty() {
                warn!("skipping empty dataset file: {}", entry_path.display());
                continue;
            }

            path.push(stem.to_string());
            let mut node = &mut dataset.root;
            for label in path.iter() {
                node = node.children.entry(label.clone()).or_default();
            }
            if node.value.replace(name.to_string()).is_none() {
                dataset.len += 1;
            }
            path.pop();
        }
    }
    Ok(())
}

impl DatasetStore for MemoryDataset {
    fn read(&self, path: &[&str]) -> Option<String> {
        let mut node = &self.root;
        for label in path {
            node = node.children.get(*label)?;
        }
        node.value.clone()
    }
}
