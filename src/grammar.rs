//! Grammar bundles and the construction algorithm.

use crate::constants::{LABEL_SEPARATOR, MAX_NAME_LENGTH};
use crate::domain::{Domain, Form};
use crate::error::{DomainError, FormatError};
use crate::label::Label;
use crate::literal::{AddressLiteralParser, BracketedLiteral};
use crate::names::{PermissiveName, StrictName, TransportName};
use crate::sequence::LabelSequence;
use crate::validator::{LabelValidator, PermissiveLabels, StrictLabels};

/// The set of grammars a [`Domain`] is validated against.
///
/// A grammar pairs a strict and a permissive [`LabelValidator`] with an
/// [`AddressLiteralParser`] for the transport tier. [`Grammar::STANDARD`]
/// uses RFC 1035, RFC 1123 and RFC 5321 rules and backs every convenience
/// constructor on [`Domain`]. Custom grammars can be injected to change
/// any tier.
///
/// # Examples
///
/// ```
/// use tiered_domain::{Grammar, Tier};
///
/// let grammar = Grammar::default();
/// let domain = grammar.parse("123.example.com").unwrap();
/// assert_eq!(domain.tier(), Tier::Permissive);
/// assert!(domain.strict().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar<S = StrictLabels, P = PermissiveLabels, L = BracketedLiteral> {
    pub(crate) strict: S,
    pub(crate) permissive: P,
    pub(crate) literal: L,
}

impl Grammar {
    /// RFC 1035, RFC 1123 and RFC 5321 grammars.
    pub const STANDARD: Self = Self {
        strict: StrictLabels,
        permissive: PermissiveLabels,
        literal: BracketedLiteral,
    };
}

impl Default for Grammar {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl<S, P, L> Grammar<S, P, L> {
    /// Creates a grammar from its three tiers.
    #[must_use]
    pub const fn new(strict: S, permissive: P, literal: L) -> Self {
        Self {
            strict,
            permissive,
            literal,
        }
    }

    /// Replaces the strict-tier validator.
    #[must_use]
    pub fn with_strict<T>(self, strict: T) -> Grammar<T, P, L> {
        Grammar {
            strict,
            permissive: self.permissive,
            literal: self.literal,
        }
    }

    /// Replaces the permissive-tier validator.
    #[must_use]
    pub fn with_permissive<T>(self, permissive: T) -> Grammar<S, T, L> {
        Grammar {
            strict: self.strict,
            permissive,
            literal: self.literal,
        }
    }

    /// Replaces the address literal parser.
    #[must_use]
    pub fn with_literal_parser<T>(self, literal: T) -> Grammar<S, P, T> {
        Grammar {
            strict: self.strict,
            permissive: self.permissive,
            literal,
        }
    }
}

impl<S, P, L> Grammar<S, P, L>
where
    S: LabelValidator,
    P: LabelValidator,
    L: AddressLiteralParser,
{
    /// Parses a domain, recording every tier it satisfies.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFormat` if the input is neither an
    /// address literal nor a valid permissive name.
    pub fn parse(&self, input: &str) -> Result<Domain, DomainError> {
        if input.is_empty() {
            return Err(DomainError::invalid_format(input, FormatError::Empty));
        }

        if input.starts_with('[') {
            let literal = self
                .literal
                .parse_literal(input)
                .ok_or_else(|| DomainError::invalid_format(input, FormatError::MalformedLiteral))?;
            tracing::trace!(input, "parsed address literal");
            return Ok(Domain::from_form(Form::Literal(literal)));
        }

        let labels = self
            .permissive_labels(input)
            .map_err(|reason| DomainError::invalid_format(input, reason))?;
        Ok(self.domain_from_labels(labels))
    }

    /// Builds a domain from explicit labels, most specific first.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFormat` if no labels are given or the
    /// joined name is invalid.
    pub fn from_labels<I, T>(&self, labels: I) -> Result<Domain, DomainError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let parts: Vec<String> = labels.into_iter().map(|l| l.as_ref().to_string()).collect();
        let joined = parts.join(".");
        if parts.is_empty() {
            return Err(DomainError::invalid_format(joined, FormatError::Empty));
        }
        self.parse(&joined)
    }

    /// Parses a name that must satisfy the strict tier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFormat` if the name is not strict.
    pub fn parse_strict(&self, input: &str) -> Result<StrictName, DomainError> {
        let labels = self
            .permissive_labels(input)
            .map_err(|reason| DomainError::invalid_format(input, reason))?;
        let parts: Vec<&str> = labels.iter().map(Label::as_str).collect();
        self.strict
            .validate_name(&parts)
            .map_err(|reason| DomainError::invalid_format(input, reason))?;
        Ok(StrictName::new_unchecked(labels))
    }

    /// Parses a name that must satisfy the permissive tier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFormat` if the name is not valid.
    pub fn parse_permissive(&self, input: &str) -> Result<PermissiveName, DomainError> {
        self.permissive_labels(input)
            .map(PermissiveName::new_unchecked)
            .map_err(|reason| DomainError::invalid_format(input, reason))
    }

    /// Parses a name or address literal at the transport tier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFormat` if the input is neither.
    pub fn parse_transport(&self, input: &str) -> Result<TransportName, DomainError> {
        Ok(TransportName::from(&self.parse(input)?))
    }

    /// Attempts to upgrade a permissive name to the strict tier.
    ///
    /// Failure is expected and returns `None`.
    #[must_use]
    pub fn upgrade(&self, name: &PermissiveName) -> Option<StrictName> {
        self.probe_strict(name.labels())
            .map(|labels| StrictName::new_unchecked(labels.clone()))
    }

    /// Converts a permissive name to the strict tier.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ConversionFailure`, naming the tiers reported
    /// by this grammar's validators, if the name is not strict.
    pub fn tighten(&self, name: &PermissiveName) -> Result<StrictName, DomainError> {
        self.upgrade(name).ok_or(DomainError::ConversionFailure {
            from: self.permissive.tier(),
            to: self.strict.tier().as_str(),
        })
    }

    /// Builds a domain from a permissive name, upgrading it to the strict
    /// tier when its labels allow.
    #[must_use]
    pub fn domain_from_permissive(&self, name: PermissiveName) -> Domain {
        self.domain_from_labels(name.into_labels())
    }

    /// Returns `labels` unchanged if they also satisfy the strict tier.
    pub(crate) fn probe_strict<'a>(&self, labels: &'a LabelSequence) -> Option<&'a LabelSequence> {
        let parts: Vec<&str> = labels.iter().map(Label::as_str).collect();
        match self.strict.validate_name(&parts) {
            Ok(()) => Some(labels),
            Err(reason) => {
                tracing::debug!(name = %labels, tier = %self.strict.tier(), %reason, "tier declined");
                None
            }
        }
    }

    /// Wraps validated labels, recording whether the strict tier holds.
    pub(crate) fn domain_from_labels(&self, labels: LabelSequence) -> Domain {
        let strict = self.probe_strict(&labels).is_some();
        tracing::trace!(name = %labels, strict, "constructed domain");
        Domain::from_form(Form::Labels { labels, strict })
    }

    /// Splits and validates `input` at the permissive tier.
    pub(crate) fn permissive_labels(&self, input: &str) -> Result<LabelSequence, FormatError> {
        if input.is_empty() {
            return Err(FormatError::Empty);
        }

        let len = input.chars().count();
        if len > MAX_NAME_LENGTH {
            return Err(FormatError::TooLong {
                max: MAX_NAME_LENGTH,
                actual: len,
            });
        }

        let parts: Vec<&str> = input.split(LABEL_SEPARATOR).collect();
        self.permissive.validate_name(&parts)?;
        Ok(LabelSequence::new_unchecked(
            parts.into_iter().map(Label::new_unchecked).collect(),
        ))
    }
}
