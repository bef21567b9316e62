//! Error type definitions.
//!
//! The public classification surface never propagates errors: both
//! [`Classifier::is_academic`](crate::Classifier::is_academic) and
//! [`Classifier::school_name`](crate::Classifier::school_name) degrade every
//! failure to `false` or an empty string. The types here exist for the lower
//! layers — normalization reports why an input could not be reduced to a
//! domain, and the dataset loaders surface construction-time problems through
//! `anyhow` at their own call sites.

use thiserror::Error;

/// Error raised when a raw input string cannot be normalized to a domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The input is neither a syntactically valid email address nor a URL,
    /// or is empty. A missing dataset entry is not an error at this layer;
    /// resolution reports absence as `None`.
    #[error("no domain name found in input: {0:?}")]
    NotADomain(String),
}
