//! Static rule sets: blacklist and academic-TLD matching.
//!
//! A [`RuleSet`] is immutable configuration handed to the classifier at
//! construction time. There are no process-wide tables; two classifiers can
//! carry independent rule sets, which keeps tests isolated and lets an
//! embedding application override the built-in data.

use crate::config::{ACADEMIC_TLDS, BLACKLIST};
use crate::domain::CanonicalDomain;

/// The two suffix tables consulted before dataset resolution.
///
/// Both tables match as literal string suffixes of the dotted domain.
/// Blacklist entries are bare domains (`"si.edu"`), so subdomains of a
/// blacklisted domain match too. Academic-TLD entries carry a leading dot
/// (`".edu"`), which pins the match to a label boundary.
#[derive(Debug, Clone)]
pub struct RuleSet {
    blacklist: Vec<String>,
    academic_tlds: Vec<String>,
}

impl Default for RuleSet {
    /// The built-in tables from [`config`](crate::config).
    fn default() -> Self {
        Self::new(BLACKLIST.iter().copied(), ACADEMIC_TLDS.iter().copied())
    }
}

impl RuleSet {
    /// Builds a rule set from custom blacklist and academic-TLD tables.
    pub fn new<B, T>(blacklist: B, academic_tlds: T) -> Self
    where
        B: IntoIterator,
        B::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        Self {
            blacklist: blacklist.into_iter().map(Into::into).collect(),
            academic_tlds: academic_tlds.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if the domain ends with any blacklisted suffix.
    ///
    /// Blacklisting force-excludes a domain: the classifier checks it before
    /// the TLD shortcut and the dataset, and a hit always wins.
    pub fn is_blacklisted(&self, domain: &CanonicalDomain) -> bool {
        self.blacklist
            .iter()
            .any(|suffix| domain.as_str().ends_with(suffix))
    }

    /// Returns true if the domain ends with a recognized academic suffix.
    ///
    /// A hit accepts the domain as academic without a dataset entry.
    pub fn is_academic_tld(&self, domain: &CanonicalDomain) -> bool {
        self.academic_tlds
            .iter()
            .any(|suffix| domain.as_str().ends_with(suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::normalize;

    fn d(raw: &str) -> CanonicalDomain {
        normalize(raw).unwrap()
    }

    #[test]
    fn test_academic_tld_match() {
        let rules = RuleSet::default();
        assert!(rules.is_academic_tld(&d("stanford.edu")));
        assert!(rules.is_academic_tld(&d("strath.ac.uk")));
        assert!(rules.is_academic_tld(&d("mother.edu.ru")));
        assert!(rules.is_academic_tld(&d("ucy.ac.cy")));
        assert!(rules.is_academic_tld(&d("acmt.ac.ir")));
    }

    #[test]
    fn test_academic_tld_respects_label_boundary() {
        let rules = RuleSet::default();
        // The leading dot in each table entry keeps an academic-looking
        // suffix embedded mid-domain from matching.
        assert!(!rules.is_academic_tld(&d("stanford.edu.com")));
        assert!(!rules.is_academic_tld(&d("strath.ac.uk.com")));
        assert!(!rules.is_academic_tld(&d("gmail.com")));
        assert!(!rules.is_academic_tld(&d("leerilly.net")));
    }

    #[test]
    fn test_academic_tld_matches_www_stripped_host() {
        let rules = RuleSet::default();
        // ".stanford.edu" is what normalization produces for www.stanford.edu.
        assert!(rules.is_academic_tld(&d("www.stanford.edu")));
    }

    #[test]
    fn test_blacklist_matches_domain_and_subdomains() {
        let rules = RuleSet::default();
        assert!(rules.is_blacklisted(&d("si.edu")));
        assert!(rules.is_blacklisted(&d("foo.si.edu")));
        assert!(rules.is_blacklisted(&d("america.edu")));
        assert!(rules.is_blacklisted(&d("australia.edu")));
        assert!(rules.is_blacklisted(&d("folger.edu")));
        assert!(!rules.is_blacklisted(&d("stanford.edu")));
    }

    #[test]
    fn test_custom_rule_set() {
        let rules = RuleSet::new(["leerilly.net"], [".school"]);
        assert!(rules.is_blacklisted(&d("leerilly.net")));
        assert!(rules.is_academic_tld(&d("little.school")));
        assert!(!rules.is_academic_tld(&d("stanford.edu")));
    }
}
