//! Domain extraction and normalization.
//!
//! This module reduces a raw email-or-URL string to a [`CanonicalDomain`]:
//! the lowercase, whitespace-trimmed, dot-separated host that every
//! downstream rule matches against.
//!
//! Key items:
//! - [`CanonicalDomain`] - the normalized domain representation
//! - [`normalize()`] - extracts a canonical domain from raw input

use std::fmt;

use log::debug;

use crate::error_handling::NormalizeError;
use crate::validate::{is_bare_host, is_email, is_request_url};

/// A normalized domain name: lowercase, trimmed, dot-separated labels.
///
/// Produced only by [`normalize`], so holding one guarantees the scheme,
/// port, path, and mailbox parts of the original input are already gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalDomain {
    name: String,
}

impl CanonicalDomain {
    fn new(host: &str) -> Result<Self, NormalizeError> {
        if host.is_empty() {
            return Err(NormalizeError::NotADomain(host.to_string()));
        }
        Ok(Self {
            name: host.to_string(),
        })
    }

    /// The dotted domain string, e.g. `"cs.strath.ac.uk"`.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// The dot-delimited labels in source order, most specific first.
    pub fn labels(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.name.split('.')
    }
}

impl fmt::Display for CanonicalDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Extracts a canonical domain from a raw email address, URL, or bare host.
///
/// The input is trimmed and lowercased, then handled by shape:
/// - email address: the domain is everything after the `@`;
/// - fully-qualified URL: the host component, with any port discarded;
/// - bare host: the trimmed string itself.
///
/// Hosts from the URL branches additionally have a literal leading `www`
/// prefix removed. This is a character strip, not a label strip: it turns
/// `www.stanford.edu` into `.stanford.edu` and `wwwstanford.edu` into
/// `stanford.edu`. Suffix matching and dataset descent both tolerate the
/// leading empty label, so observable classification is unaffected.
///
/// # Errors
///
/// Returns [`NormalizeError::NotADomain`] when the input is empty or is
/// neither email- nor URL-shaped (e.g. `"the"`, `".com"`).
pub fn normalize(raw: &str) -> Result<CanonicalDomain, NormalizeError> {
    let input = raw.trim().to_lowercase();

    if is_email(&input) {
        // The email shape admits exactly one '@'.
        let (_, domain) = input
            .split_once('@')
            .ok_or_else(|| NormalizeError::NotADomain(raw.to_string()))?;
        return CanonicalDomain::new(domain);
    }

    let host = if is_request_url(&input) {
        let parsed = url::Url::parse(&input)
            .map_err(|_| NormalizeError::NotADomain(raw.to_string()))?;
        // host_str() never includes the port.
        match parsed.host_str() {
            Some(h) => h.to_string(),
            None => return Err(NormalizeError::NotADomain(raw.to_string())),
        }
    } else if is_bare_host(&input) {
        input
    } else {
        debug!("input is neither email- nor URL-shaped: {raw:?}");
        return Err(NormalizeError::NotADomain(raw.to_string()));
    };

    let host = host.strip_prefix("www").unwrap_or(&host);
    CanonicalDomain::new(host)
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
