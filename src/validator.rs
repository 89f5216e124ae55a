//! Per-tier label grammars.
//!
//! # Grammar Reference
//!
//! ```abnf
//! ; RFC 1035 (strict)
//! label      = letter [ [ ldh-str ] let-dig ]
//! ; RFC 1123 (permissive)
//! label      = let-dig [ [ ldh-str ] let-dig ]
//! ldh-str    = 1*( let-dig / "-" )
//! let-dig    = letter / digit
//! ```
//!
//! Letters and digits are Unicode alphabetic and numeric characters so that
//! U-labels can be represented before ASCII encoding.

use crate::constants::MAX_LABEL_LENGTH;
use crate::error::{FormatError, LabelError};
use crate::label::Label;
use crate::sequence::LabelSequence;
use crate::tier::Tier;

/// A label grammar for one tier.
///
/// Implementations are stateless and side-effect free. The provided
/// methods cover name-level checks; implementations override them when the
/// tier adds rules that depend on label position.
pub trait LabelValidator {
    /// The tier this grammar defines.
    fn tier(&self) -> Tier;

    /// Validates a single label.
    ///
    /// # Errors
    ///
    /// Returns `LabelError` describing the first rule the label breaks.
    fn validate_label(&self, label: &str) -> Result<(), LabelError>;

    /// Validates a full name given as its labels, most specific first.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidLabel` for the first invalid label.
    fn validate_name(&self, labels: &[&str]) -> Result<(), FormatError> {
        for (index, label) in labels.iter().enumerate() {
            self.validate_label(label)
                .map_err(|error| FormatError::InvalidLabel {
                    index,
                    label: (*label).to_string(),
                    error,
                })?;
        }
        Ok(())
    }

    /// Extracts the top-level label.
    fn extract_tld<'a>(&self, labels: &'a LabelSequence) -> Option<&'a Label> {
        labels.tld()
    }

    /// Extracts the second-level label.
    fn extract_sld<'a>(&self, labels: &'a LabelSequence) -> Option<&'a Label> {
        labels.sld()
    }
}

/// RFC 1035 preferred name syntax.
///
/// ```
/// use tiered_domain::{LabelValidator, StrictLabels};
///
/// assert!(StrictLabels.validate_label("example").is_ok());
/// assert!(StrictLabels.validate_label("123").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrictLabels;

/// RFC 1123 host name syntax.
///
/// ```
/// use tiered_domain::{LabelValidator, PermissiveLabels};
///
/// assert!(PermissiveLabels.validate_label("123").is_ok());
/// assert!(PermissiveLabels.validate_name(&["10", "0", "0", "1"]).is_err());
/// assert!(PermissiveLabels.validate_name(&["123"]).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissiveLabels;

impl LabelValidator for StrictLabels {
    fn tier(&self) -> Tier {
        Tier::Strict
    }

    fn validate_label(&self, label: &str) -> Result<(), LabelError> {
        validate_ldh(label)?;
        match label.chars().next() {
            Some(c) if c.is_alphabetic() => Ok(()),
            Some(found) => Err(LabelError::MustStartWithLetter { found }),
            None => Err(LabelError::Empty),
        }
    }
}

impl LabelValidator for PermissiveLabels {
    fn tier(&self) -> Tier {
        Tier::Permissive
    }

    fn validate_label(&self, label: &str) -> Result<(), LabelError> {
        validate_ldh(label)
    }

    fn validate_name(&self, labels: &[&str]) -> Result<(), FormatError> {
        for (index, label) in labels.iter().enumerate() {
            self.validate_label(label)
                .map_err(|error| FormatError::InvalidLabel {
                    index,
                    label: (*label).to_string(),
                    error,
                })?;
        }

        // An all-numeric top label reads as part of an IPv4 address
        // (RFC 1123 2.1), whatever the label count.
        if let Some(tld) = labels.last() {
            if tld.chars().all(|c| c.is_ascii_digit()) {
                return Err(FormatError::NumericTld {
                    label: (*tld).to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Letters, digits and internal hyphens, 1-63 characters.
fn validate_ldh(label: &str) -> Result<(), LabelError> {
    if label.is_empty() {
        return Err(LabelError::Empty);
    }

    let len = label.chars().count();
    if len > MAX_LABEL_LENGTH {
        return Err(LabelError::TooLong {
            max: MAX_LABEL_LENGTH,
            actual: len,
        });
    }

    for (position, c) in label.chars().enumerate() {
        if !c.is_alphanumeric() && c != '-' {
            return Err(LabelError::InvalidChar { char: c, position });
        }
    }

    if label.starts_with('-') {
        return Err(LabelError::LeadingHyphen);
    }
    if label.ends_with('-') {
        return Err(LabelError::TrailingHyphen);
    }
    Ok(())
}
