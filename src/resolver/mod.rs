//! Institution resolution: the suffix-descent walk.
//!
//! Institutions register at their apex domain (`stanford.edu`), so any
//! subdomain must resolve to the same institution without a dataset entry of
//! its own. The walk therefore starts at the TLD and extends the path one
//! label at a time toward the most specific label, returning the first value
//! it finds.
//!
//! Most-general-wins: if the dataset ever held entries at both
//! `stanford.edu` and `slac.stanford.edu`, the shallower one is returned for
//! every domain in that chain and the deeper one is never reached. Keeping
//! chains single-entry is a dataset curation invariant, not something this
//! walk enforces.

use log::debug;

use crate::dataset::DatasetStore;
use crate::domain::CanonicalDomain;

/// Walks the dataset along `domain`'s label hierarchy and returns the
/// shallowest registered institution name, whitespace-trimmed.
///
/// The bare TLD itself is never queried; descent starts at two labels. A
/// full descent with no value yields `None`, as does a single-label domain.
pub fn resolve(store: &dyn DatasetStore, domain: &CanonicalDomain) -> Option<String> {
    let mut path: Vec<&str> = Vec::new();

    for label in domain.labels().rev() {
        path.push(label);
        if path.len() < 2 {
            continue;
        }
        if let Some(name) = store.read(&path) {
            debug!("{domain} resolved at {}", path.join("."));
            return Some(name.trim().to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::MemoryDataset;
    use crate::domain::normalize;

    fn d(raw: &str) -> CanonicalDomain {
        normalize(raw).unwrap()
    }

    #[test]
    fn test_resolve_apex() {
        let dataset = MemoryDataset::from_entries([("stanford.edu", "Stanford University")]);
        assert_eq!(
            resolve(&dataset, &d("stanford.edu")),
            Some("Stanford University".to_string())
        );
    }

    #[test]
    fn test_resolve_subdomain_inherits() {
        let dataset = MemoryDataset::from_entries([("stanford.edu", "Stanford University")]);
        assert_eq!(
            resolve(&dataset, &d("slac.stanford.edu")),
            Some("Stanford University".to_string())
        );
        assert_eq!(
            resolve(&dataset, &d("deep.slac.stanford.edu")),
            Some("Stanford University".to_string())
        );
    }

    #[test]
    fn test_resolve_multi_label_tld() {
        let dataset = MemoryDataset::from_entries([("strath.ac.uk", "University of Strathclyde")]);
        assert_eq!(
            resolve(&dataset, &d("cs.strath.ac.uk")),
            Some("University of Strathclyde".to_string())
        );
    }

    #[test]
    fn test_resolve_unregistered_chain() {
        let dataset = MemoryDataset::from_entries([("stanford.edu", "Stanford University")]);
        assert_eq!(resolve(&dataset, &d("gmail.com")), None);
    }

    #[test]
    fn test_resolve_shallow_entry_shadows_deeper() {
        let dataset = MemoryDataset::from_entries([
            ("stanford.edu", "Stanford University"),
            ("slac.stanford.edu", "SLAC National Accelerator Laboratory"),
        ]);
        // Most-general-wins: the apex entry shadows the deeper one.
        assert_eq!(
            resolve(&dataset, &d("slac.stanford.edu")),
            Some("Stanford University".to_string())
        );
    }

    #[test]
    fn test_resolve_trims_stored_name() {
        let mut dataset = MemoryDataset::new();
        // FsDataset hands back raw file contents; the walk owns the trim.
        struct Raw(MemoryDataset);
        impl DatasetStore for Raw {
            fn read(&self, path: &[&str]) -> Option<String> {
                self.0.read(path).map(|n| format!("{n}\n"))
            }
        }
        dataset.insert("ugr.es", "Universidad de Granada");
        let raw = Raw(dataset);
        assert_eq!(
            resolve(&raw, &d("ugr.es")),
            Some("Universidad de Granada".to_string())
        );
    }

    #[test]
    fn test_resolve_never_queries_bare_tld() {
        struct Spy;
        impl DatasetStore for Spy {
            fn read(&self, path: &[&str]) -> Option<String> {
                assert!(path.len() >= 2, "queried bare TLD path {path:?}");
                None
            }
        }
        assert_eq!(resolve(&Spy, &d("cs.strath.ac.uk")), None);
    }
}
