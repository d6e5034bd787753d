//! Ordered set of affirmative reference terms.

use serde::{Deserialize, Serialize};

/// Known affirmative expressions, in match-attribution order.
///
/// Order decides which term a match is attributed to, never the
/// classification itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceTermSet {
    terms: Vec<String>,
}

impl ReferenceTermSet {
    pub fn new(terms: Vec<String>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<S: Into<String>> From<Vec<S>> for ReferenceTermSet {
    fn from(terms: Vec<S>) -> Self {
        terms.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ReferenceTermSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a ReferenceTermSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
