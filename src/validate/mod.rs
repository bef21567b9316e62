//! Input-shape predicates.
//!
//! Normalization needs to know whether a raw string is shaped like an email
//! address, a fully-qualified request URL, or a bare host before it can pick
//! the domain out of it. These checks are purely syntactic; deliverability of
//! an address or reachability of a host is never considered.

use std::sync::LazyLock;

use regex::Regex;

/// Email shape: one local part, one `@`, and a dotted domain. The character
/// classes exclude `@`, so a string with multiple `@` signs never matches.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)+$",
    )
    .expect("email regex is valid")
});

/// Bare host shape: at least two non-empty labels of alphanumerics and
/// hyphens, no scheme, port, or path.
static HOST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)+$")
        .expect("host regex is valid")
});

/// Returns true if `input` is shaped like an email address.
///
/// Expects already-lowercased input; normalization folds case before calling.
pub(crate) fn is_email(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}

/// Returns true if `input` is a fully-qualified URL with a host component
/// (e.g. `http://www.stanford.edu:9393`).
pub(crate) fn is_request_url(input: &str) -> bool {
    url::Url::parse(input).map(|u| u.has_host()).unwrap_or(false)
}

/// Returns true if `input` is a bare dotted host with no scheme or port
/// (e.g. `soft-eng.strath.ac.uk`). Dotless strings and strings with empty
/// labels (`".com"`) are rejected.
pub(crate) fn is_bare_host(input: &str) -> bool {
    HOST_RE.is_match(input)
}
