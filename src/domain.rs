//! The tiered domain aggregate.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{DomainError, IdnaError};
use crate::grammar::Grammar;
use crate::label::Label;
use crate::literal::AddressLiteral;
use crate::sequence::LabelSequence;
use crate::tier::Tier;

/// Internal representation: one label sequence flagged with its strictest
/// tier, or an address literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum Form {
    Labels { labels: LabelSequence, strict: bool },
    Literal(AddressLiteral),
}

/// A validated domain name, annotated with every tier it satisfies.
///
/// A `Domain` is either label-based, in which case it is always valid at
/// the permissive (RFC 1123) tier and possibly at the strict (RFC 1035)
/// tier, or an address literal, which exists only at the transport
/// (RFC 5321) tier. Values are immutable; hierarchy operations return new
/// domains.
///
/// Labels keep their case for display, while equality and hashing fold
/// ASCII case.
///
/// # Examples
///
/// ```
/// use tiered_domain::{Domain, Tier};
///
/// let domain = Domain::parse("mail.example.com").unwrap();
/// assert_eq!(domain.tier(), Tier::Strict);
/// assert_eq!(domain.tld().unwrap().as_str(), "com");
/// assert_eq!(domain.sld().unwrap().as_str(), "example");
///
/// let parent = domain.parent().unwrap().unwrap();
/// assert_eq!(parent.name(), "example.com");
/// assert!(domain.is_subdomain_of(&parent));
///
/// let api = parent.adding_subdomain(["api", "v1"]).unwrap();
/// assert_eq!(api.name(), "api.v1.example.com");
/// ```
#[derive(Debug, Clone)]
pub struct Domain {
    form: Form,
    /// Canonical name, derived once from `form`
    name: String,
}

impl Domain {
    pub(crate) fn from_form(form: Form) -> Self {
        let name = match &form {
            Form::Labels { labels, .. } => labels.to_string(),
            Form::Literal(literal) => literal.to_string(),
        };
        Self { form, name }
    }

    /// Parses a domain using the standard grammars.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFormat` if:
    /// - The input is empty or exceeds 253 characters
    /// - Any label is empty, too long, or contains invalid characters
    /// - The top-level label is all digits
    /// - Bracketed input is not a valid IPv4 or IPv6 literal
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        Grammar::STANDARD.parse(input)
    }

    /// Builds a domain from explicit labels, most specific first.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFormat` if no labels are given or the
    /// joined name is invalid.
    pub fn from_labels<I, T>(labels: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Grammar::STANDARD.from_labels(labels)
    }

    /// Parses a domain, returning `None` instead of an error.
    #[must_use]
    pub fn from_raw_value(raw: &str) -> Option<Self> {
        Self::parse(raw).ok()
    }

    /// Returns the canonical name. Same as [`Domain::name`].
    #[must_use]
    pub fn raw_value(&self) -> &str {
        &self.name
    }

    /// Returns the canonical name used for display and serialization.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the canonical name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Returns the strictest tier this domain satisfies.
    #[must_use]
    pub const fn tier(&self) -> Tier {
        match &self.form {
            Form::Labels { strict: true, .. } => Tier::Strict,
            Form::Labels { strict: false, .. } => Tier::Permissive,
            Form::Literal(_) => Tier::Transport,
        }
    }

    /// Returns true if this domain satisfies `tier`.
    #[must_use]
    pub fn satisfies(&self, tier: Tier) -> bool {
        self.tier().implies(tier)
    }

    /// Returns true if the strict (RFC 1035) tier holds.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        matches!(self.form, Form::Labels { strict: true, .. })
    }

    /// Returns true if this is an address literal.
    #[must_use]
    pub const fn is_address_literal(&self) -> bool {
        matches!(self.form, Form::Literal(_))
    }

    /// Returns the label sequence, or `None` for an address literal.
    #[must_use]
    pub const fn labels(&self) -> Option<&LabelSequence> {
        match &self.form {
            Form::Labels { labels, .. } => Some(labels),
            Form::Literal(_) => None,
        }
    }

    /// Returns the strict-tier label sequence, if the strict tier holds.
    ///
    /// This is always the same sequence as [`Domain::labels`].
    #[must_use]
    pub const fn strict(&self) -> Option<&LabelSequence> {
        match &self.form {
            Form::Labels {
                labels,
                strict: true,
            } => Some(labels),
            _ => None,
        }
    }

    /// Returns the address literal, if this is one.
    #[must_use]
    pub const fn address_literal(&self) -> Option<&AddressLiteral> {
        match &self.form {
            Form::Literal(literal) => Some(literal),
            Form::Labels { .. } => None,
        }
    }

    /// Returns the number of labels; zero for an address literal.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.labels().map_or(0, LabelSequence::len)
    }

    /// Returns the top-level label. A single-label domain is its own TLD.
    #[must_use]
    pub fn tld(&self) -> Option<&Label> {
        Grammar::STANDARD.tld(self)
    }

    /// Returns the second-level label, if there are at least two labels.
    #[must_use]
    pub fn sld(&self) -> Option<&Label> {
        Grammar::STANDARD.sld(self)
    }

    /// Returns true if `self` lies strictly below `other`.
    ///
    /// Every label of `other` must match the trailing labels of `self`
    /// position by position. Address literals are never subdomains and
    /// never have subdomains, and no domain is its own subdomain.
    #[must_use]
    pub fn is_subdomain_of(&self, other: &Self) -> bool {
        match (self.labels(), other.labels()) {
            (Some(child), Some(parent)) => child.is_subdomain_of(parent),
            _ => false,
        }
    }

    /// Returns a new domain with `labels` prepended, leftmost first.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CannotCreateSubdomain` if this is an address
    /// literal, `labels` is empty, or the extended name is invalid.
    pub fn adding_subdomain<I, T>(&self, labels: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Grammar::STANDARD.adding_subdomain(self, labels)
    }

    /// Returns the domain without its leftmost label, or `None` for a
    /// single-label domain.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ConversionFailure` for an address literal or
    /// if the shortened name fails re-validation.
    pub fn parent(&self) -> Result<Option<Self>, DomainError> {
        Grammar::STANDARD.parent(self)
    }

    /// Returns the registrable root (SLD and TLD), or `None` with fewer
    /// than two labels.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ConversionFailure` for an address literal or
    /// if the shortened name fails re-validation.
    pub fn root(&self) -> Result<Option<Self>, DomainError> {
        Grammar::STANDARD.root(self)
    }

    /// Converts every U-label to its A-label form.
    ///
    /// # Errors
    ///
    /// Returns `IdnaError` if a label cannot be encoded or the result is
    /// not a valid domain.
    pub fn to_ascii(&self) -> Result<Self, IdnaError> {
        Grammar::STANDARD.to_ascii(self)
    }

    /// Converts every A-label to its U-label form.
    ///
    /// # Errors
    ///
    /// Returns `IdnaError` if a label cannot be decoded or the result is
    /// not a valid domain.
    pub fn to_unicode(&self) -> Result<Self, IdnaError> {
        Grammar::STANDARD.to_unicode(self)
    }

    pub(crate) const fn form(&self) -> &Form {
        &self.form
    }
}

impl PartialEq for Domain {
    fn eq(&self, other: &Self) -> bool {
        self.form == other.form
    }
}

impl Eq for Domain {}

impl Hash for Domain {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.form.hash(state);
    }
}

impl PartialOrd for Domain {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Domain {
    fn cmp(&self, other: &Self) -> Ordering {
        self.form.cmp(&other.form)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl FromStr for Domain {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl TryFrom<&str> for Domain {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Domain {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<AddressLiteral> for Domain {
    fn from(literal: AddressLiteral) -> Self {
        Self::from_form(Form::Literal(literal))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Domain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.name)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Domain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
