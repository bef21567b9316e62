//! Institution dataset stores.
//!
//! The dataset is a hierarchical mapping from a TLD-first label path to an
//! institution display name: `["uk", "ac", "strath"]` holds
//! `"University of Strathclyde"`. Not every node carries a value; a node
//! without one is just an interior branch.
//!
//! On disk the dataset is a directory tree mirroring that hierarchy, one
//! `.txt` file per institution:
//!
//! ```text
//! domains/
//!   edu/
//!     stanford.txt      "Stanford University"
//!   uk/
//!     ac/
//!       strath.txt      "University of Strathclyde"
//! ```
//!
//! Two store implementations are provided: [`MemoryDataset`] preloads the
//! tree into an in-memory trie (the recommended default; resolution then
//! touches no I/O), and [`FsDataset`] stats and reads files on demand,
//! matching the on-disk layout one file access per descent step.

mod fs;
mod memory;

use std::path::Path;

use anyhow::{bail, Context, Result};

pub use fs::FsDataset;
pub use memory::MemoryDataset;

/// Read-only hierarchical lookup of institution names.
///
/// `path` is ordered TLD-first. Implementations must be safe for concurrent
/// reads and must degrade I/O failures to `None` rather than fail the
/// classification call.
pub trait DatasetStore: Send + Sync {
    /// Returns the institution name stored at exactly `path`, if any.
    fn read(&self, path: &[&str]) -> Option<String>;
}

/// Checks a `domains/` directory tree for dataset hygiene.
///
/// Every regular file must have a `.txt` extension and hold at most a single
/// line of text. Useful as a guard in dataset curation pipelines; the stores
/// themselves only warn about malformed entries.
///
/// # Errors
///
/// Returns an error naming the first offending file, or any directory that
/// could not be read.
pub fn validate_dir(root: &Path) -> Result<()> {
    let entries = std::fs::read_dir(root)
        .with_context(|| format!("failed to read dataset directory {}", root.display()))?;

    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to list dataset directory {}", root.display()))?
            .path();
        if path.is_dir() {
            validate_dir(&path)?;
        } else {
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                bail!("{} should have a .txt extension", path.display());
            }
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            if content.lines().count() > 1 {
                bail!("{} should hold a single line of text", path.display());
            }
        }
    }
    Ok(())
}
