//! Ordered label sequences and their structural operations.

use std::fmt;

use crate::constants::LABEL_SEPARATOR;
use crate::label::Label;

/// An ordered, non-empty sequence of labels, most specific first.
///
/// `www.example.com` is stored as `["www", "example", "com"]`. Sequences
/// are only produced by a [`Grammar`](crate::Grammar), so every sequence
/// has passed at least permissive validation and fits in 253 characters.
///
/// # Examples
///
/// ```
/// use tiered_domain::Domain;
///
/// let domain = Domain::parse("www.example.com").unwrap();
/// let labels = domain.labels().unwrap();
/// assert_eq!(labels.len(), 3);
/// assert_eq!(labels.tld().unwrap().as_str(), "com");
/// assert_eq!(labels.sld().unwrap().as_str(), "example");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LabelSequence {
    labels: Vec<Label>,
}

impl LabelSequence {
    /// Wraps labels a validator has already accepted. `labels` is non-empty.
    pub(crate) fn new_unchecked(labels: Vec<Label>) -> Self {
        debug_assert!(!labels.is_empty());
        Self { labels }
    }

    /// Returns the labels, most specific first.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Returns an iterator over the labels, most specific first.
    pub fn iter(&self) -> std::slice::Iter<'_, Label> {
        self.labels.iter()
    }

    /// Returns the number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false; sequences hold at least one label.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the encoded length in characters, separators included.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.labels.iter().map(Label::len).sum::<usize>() + self.labels.len() - 1
    }

    /// Returns the rightmost label. A single-label name is its own TLD.
    #[must_use]
    pub fn tld(&self) -> Option<&Label> {
        self.labels.last()
    }

    /// Returns the second label from the right.
    #[must_use]
    pub fn sld(&self) -> Option<&Label> {
        self.labels.len().checked_sub(2).map(|i| &self.labels[i])
    }

    /// Returns the labels without the leftmost one, or `None` for a
    /// single label.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.labels.len() < 2 {
            return None;
        }
        Some(Self::new_unchecked(self.labels[1..].to_vec()))
    }

    /// Returns the last two labels, or `None` with fewer than two.
    #[must_use]
    pub fn root(&self) -> Option<Self> {
        let start = self.labels.len().checked_sub(2)?;
        Some(Self::new_unchecked(self.labels[start..].to_vec()))
    }

    /// Returns `labels` followed by `self`. The result is not validated.
    #[must_use]
    pub(crate) fn prepend(&self, labels: Vec<Label>) -> Self {
        let mut out = labels;
        out.extend(self.labels.iter().cloned());
        Self::new_unchecked(out)
    }

    /// Returns true if `self` is strictly longer than `other` and its
    /// trailing labels equal `other` position by position.
    #[must_use]
    pub fn is_subdomain_of(&self, other: &Self) -> bool {
        self.labels.len() > other.labels.len() && self.labels.ends_with(&other.labels)
    }
}

impl fmt::Display for LabelSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for label in &self.labels {
            if !first {
                write!(f, "{LABEL_SEPARATOR}")?;
            }
            write!(f, "{label}")?;
            first = false;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a LabelSequence {
    type Item = &'a Label;
    type IntoIter = std::slice::Iter<'a, Label>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.iter()
    }
}
