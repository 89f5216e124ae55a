//! Label type for domain names.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::LabelError;
use crate::validator::{LabelValidator, PermissiveLabels};

/// A validated domain name label.
///
/// Labels are 1-63 characters of letters, digits and internal hyphens.
/// Case is preserved for display, but equality, ordering and hashing fold
/// ASCII case, so `Example` and `example` are the same label. Non-ASCII
/// characters compare exactly.
///
/// # Examples
///
/// ```
/// use tiered_domain::Label;
///
/// let label = Label::parse("Example").unwrap();
/// assert_eq!(label.as_str(), "Example");
/// assert_eq!(label, Label::parse("example").unwrap());
///
/// assert!(Label::parse("-bad").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Label(String);

impl Label {
    /// Parses a label using the permissive (RFC 1123) label grammar.
    ///
    /// # Errors
    ///
    /// Returns `LabelError` if:
    /// - The label is empty
    /// - The label exceeds 63 characters
    /// - The label contains characters other than letters, digits, hyphens
    /// - The label starts or ends with a hyphen
    pub fn parse(input: &str) -> Result<Self, LabelError> {
        PermissiveLabels.validate_label(input)?;
        Ok(Self(input.to_string()))
    }

    /// Wraps a string that a validator has already accepted.
    pub(crate) fn new_unchecked(input: &str) -> Self {
        Self(input.to_string())
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the label length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Always false; labels are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the label contains any non-ASCII character.
    #[must_use]
    pub fn is_unicode(&self) -> bool {
        !self.0.is_ascii()
    }

    fn folded(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b.to_ascii_lowercase())
    }
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Label {}

impl Hash for Label {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.folded() {
            state.write_u8(b);
        }
        state.write_u8(0xff);
    }
}

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Label {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(other.folded())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Label {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn parse_valid_label() {
        let label = Label::parse("example").unwrap();
        assert_eq!(label.as_str(), "example");
        assert_eq!(label.len(), 7);
    }

    #[test]
    fn parse_leading_digit() {
        assert!(Label::parse("123").is_ok());
    }

    #[test]
    fn parse_unicode_label() {
        let label = Label::parse("café").unwrap();
        assert!(label.is_unicode());
        assert_eq!(label.len(), 4);
    }

    #[test]
    fn parse_empty_fails() {
        assert!(matches!(Label::parse(""), Err(LabelError::Empty)));
    }

    #[test]
    fn parse_too_long_fails() {
        let long = "a".repeat(64);
        assert!(matches!(
            Label::parse(&long),
            Err(LabelError::TooLong { max: 63, actual: 64 })
        ));
    }

    #[test]
    fn parse_underscore_fails() {
        assert!(matches!(
            Label::parse("my_host"),
            Err(LabelError::InvalidChar { char: '_', position: 2 })
        ));
    }

    #[test]
    fn equality_folds_ascii_case() {
        let upper = Label::parse("EXAMPLE").unwrap();
        let lower = Label::parse("example").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.cmp(&lower), Ordering::Equal);
        assert_eq!(upper.as_str(), "EXAMPLE");

        let set: HashSet<Label> = [upper, lower].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}
