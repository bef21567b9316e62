//! Built-in rule tables.
//!
//! This module provides the static data behind
//! [`RuleSet::default`](crate::RuleSet::default): the blacklist of known
//! non-academic exception domains and the table of recognized academic
//! top-level suffixes.

mod constants;

pub use constants::{ACADEMIC_TLDS, BLACKLIST};
