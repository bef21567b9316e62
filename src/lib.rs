//! academic_domains library: academic institution classification
//!
//! This library decides whether an email address or URL belongs to an academic
//! institution and, when it does, resolves the institution's display name.
//! Classification is purely syntactic: the input is normalized to a canonical
//! domain, then matched against a blacklist, a table of academic top-level
//! suffixes, and a hierarchical institution dataset. No network lookups are
//! performed.
//!
//! # Example
//!
//! ```
//! use academic_domains::{Classifier, MemoryDataset, RuleSet};
//!
//! let dataset = MemoryDataset::from_entries([
//!     ("stanford.edu", "Stanford University"),
//!     ("strath.ac.uk", "University of Strathclyde"),
//! ]);
//! let classifier = Classifier::new(RuleSet::default(), dataset);
//!
//! assert!(classifier.is_academic("lreilly@stanford.edu"));
//! assert!(!classifier.is_academic("lee@gmail.com"));
//! assert_eq!(
//!     classifier.school_name("lreilly@cs.strath.ac.uk"),
//!     "University of Strathclyde"
//! );
//! ```
//!
//! # Dataset
//!
//! The institution dataset is supplied by the embedding application, either
//! preloaded in memory ([`MemoryDataset`]) or read on demand from a directory
//! tree of one-line text files ([`FsDataset`]). See the [`dataset`] module for
//! the on-disk layout and loading options.

#![warn(missing_docs)]

mod classifier;
pub mod config;
pub mod dataset;
mod domain;
mod error_handling;
mod resolver;
mod rules;
mod validate;

// Re-export public API
pub use classifier::Classifier;
pub use dataset::{DatasetStore, FsDataset, MemoryDataset};
pub use domain::{normalize, CanonicalDomain};
pub use error_handling::NormalizeError;
pub use rules::RuleSet;
