//! Classification orchestration.

use crate::dataset::DatasetStore;
use crate::domain::normalize;
use crate::resolver::resolve;
use crate::rules::RuleSet;

/// Classifies email addresses and URLs as academic institutions.
///
/// Owns its [`RuleSet`] and dataset store, so independently configured
/// instances can coexist. Both entry points are pure functions of the input
/// and the construction-time data: they never fail, never touch the network,
/// and are safe to call from multiple threads.
pub struct Classifier {
    rules: RuleSet,
    dataset: Box<dyn DatasetStore>,
}

impl Classifier {
    /// Creates a classifier from a rule set and a dataset store.
    pub fn new(rules: RuleSet, dataset: impl DatasetStore + 'static) -> Self {
        Self {
            rules,
            dataset: Box::new(dataset),
        }
    }

    /// Creates a classifier with the built-in rule tables.
    pub fn with_default_rules(dataset: impl DatasetStore + 'static) -> Self {
        Self::new(RuleSet::default(), dataset)
    }

    /// Returns true if the email address or URL belongs to an academic
    /// institution.
    ///
    /// Rules apply in order, first match wins: an unparseable input is not
    /// academic; a blacklisted domain is not academic regardless of anything
    /// downstream; a recognized academic TLD is academic without a dataset
    /// entry; otherwise the dataset decides.
    pub fn is_academic(&self, input: &str) -> bool {
        let Ok(domain) = normalize(input) else {
            return false;
        };

        if self.rules.is_blacklisted(&domain) {
            return false;
        }
        if self.rules.is_academic_tld(&domain) {
            return true;
        }

        resolve(self.dataset.as_ref(), &domain).is_some()
    }

    /// Returns the institution's display name, or an empty string when the
    /// input is invalid, blacklisted, or has no registered institution.
    ///
    /// Naming is independent of classification: a domain accepted through
    /// the academic-TLD shortcut still yields an empty name unless the
    /// dataset holds an entry for it.
    pub fn school_name(&self, input: &str) -> String {
        let Ok(domain) = normalize(input) else {
            return String::new();
        };

        if self.rules.is_blacklisted(&domain) {
            return String::new();
        }

        resolve(self.dataset.as_ref(), &domain).unwrap_or_default()
    }
}
