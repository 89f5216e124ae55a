//! Single-tier name types and conversions between tiers.
//!
//! [`Domain`] records every tier a name satisfies. The types here pin a
//! value to one tier, for APIs that demand a specific grammar:
//!
//! | Type             | Grammar  | Address literals |
//! |------------------|----------|------------------|
//! | `StrictName`     | RFC 1035 | no               |
//! | `PermissiveName` | RFC 1123 | no               |
//! | `TransportName`  | RFC 5321 | yes              |
//!
//! Relaxing to a looser tier is infallible. Tightening goes through
//! `TryFrom` and fails with `DomainError::ConversionFailure`.

use std::fmt;
use std::str::FromStr;

use crate::domain::{Domain, Form};
use crate::error::DomainError;
use crate::grammar::Grammar;
use crate::literal::AddressLiteral;
use crate::sequence::LabelSequence;
use crate::tier::Tier;

/// A name valid under the strict (RFC 1035) grammar.
///
/// # Examples
///
/// ```
/// use tiered_domain::{Domain, PermissiveName, StrictName};
///
/// let strict = StrictName::parse("example.com").unwrap();
/// let domain = Domain::from(strict.clone());
/// assert!(domain.is_strict());
///
/// let relaxed = PermissiveName::from(strict);
/// assert_eq!(relaxed.to_string(), "example.com");
///
/// assert!(StrictName::parse("1.example.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrictName(LabelSequence);

/// A name valid under the permissive (RFC 1123) grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PermissiveName(LabelSequence);

/// A name or address literal valid under the transport (RFC 5321) grammar.
///
/// # Examples
///
/// ```
/// use tiered_domain::{PermissiveName, TransportName};
///
/// let literal = TransportName::parse("[192.168.1.1]").unwrap();
/// assert!(PermissiveName::try_from(literal).is_err());
///
/// let name = TransportName::parse("mail.example.com").unwrap();
/// assert!(PermissiveName::try_from(name).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransportName {
    /// A label-based host name
    Labels(PermissiveName),
    /// A bracketed IP address
    Literal(AddressLiteral),
}

impl StrictName {
    pub(crate) const fn new_unchecked(labels: LabelSequence) -> Self {
        Self(labels)
    }

    /// Parses a strict name using the standard grammars.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFormat` if the name is not valid under
    /// RFC 1035.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        Grammar::STANDARD.parse_strict(input)
    }

    /// Returns the labels.
    #[must_use]
    pub const fn labels(&self) -> &LabelSequence {
        &self.0
    }
}

impl PermissiveName {
    pub(crate) const fn new_unchecked(labels: LabelSequence) -> Self {
        Self(labels)
    }

    /// Parses a permissive name using the standard grammars.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFormat` if the name is not valid under
    /// RFC 1123.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        Grammar::STANDARD.parse_permissive(input)
    }

    /// Returns the labels.
    #[must_use]
    pub const fn labels(&self) -> &LabelSequence {
        &self.0
    }

    pub(crate) fn into_labels(self) -> LabelSequence {
        self.0
    }
}

impl TransportName {
    /// Parses a transport name using the standard grammars.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFormat` if the input is neither a valid
    /// host name nor an address literal.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        Grammar::STANDARD.parse_transport(input)
    }

    /// Returns the labels, or `None` for an address literal.
    #[must_use]
    pub const fn labels(&self) -> Option<&LabelSequence> {
        match self {
            Self::Labels(name) => Some(name.labels()),
            Self::Literal(_) => None,
        }
    }
}

impl From<StrictName> for PermissiveName {
    fn from(name: StrictName) -> Self {
        Self(name.0)
    }
}

impl TryFrom<PermissiveName> for StrictName {
    type Error = DomainError;

    fn try_from(name: PermissiveName) -> Result<Self, Self::Error> {
        Grammar::STANDARD.tighten(&name)
    }
}

impl From<PermissiveName> for TransportName {
    fn from(name: PermissiveName) -> Self {
        Self::Labels(name)
    }
}

impl From<StrictName> for TransportName {
    fn from(name: StrictName) -> Self {
        Self::Labels(name.into())
    }
}

impl TryFrom<TransportName> for PermissiveName {
    type Error = DomainError;

    fn try_from(name: TransportName) -> Result<Self, Self::Error> {
        match name {
            TransportName::Labels(name) => Ok(name),
            TransportName::Literal(_) => Err(DomainError::ConversionFailure {
                from: Tier::Transport,
                to: Tier::Permissive.as_str(),
            }),
        }
    }
}

impl From<StrictName> for Domain {
    fn from(name: StrictName) -> Self {
        Self::from_form(Form::Labels {
            labels: name.0,
            strict: true,
        })
    }
}

impl From<PermissiveName> for Domain {
    fn from(name: PermissiveName) -> Self {
        Grammar::STANDARD.domain_from_permissive(name)
    }
}

impl From<TransportName> for Domain {
    fn from(name: TransportName) -> Self {
        match name {
            TransportName::Labels(name) => name.into(),
            TransportName::Literal(literal) => literal.into(),
        }
    }
}

impl TryFrom<&Domain> for StrictName {
    type Error = DomainError;

    fn try_from(domain: &Domain) -> Result<Self, Self::Error> {
        domain
            .strict()
            .map(|labels| Self(labels.clone()))
            .ok_or(DomainError::ConversionFailure {
                from: domain.tier(),
                to: Tier::Strict.as_str(),
            })
    }
}

impl TryFrom<&Domain> for PermissiveName {
    type Error = DomainError;

    fn try_from(domain: &Domain) -> Result<Self, Self::Error> {
        domain
            .labels()
            .map(|labels| Self(labels.clone()))
            .ok_or(DomainError::ConversionFailure {
                from: Tier::Transport,
                to: Tier::Permissive.as_str(),
            })
    }
}

impl From<&Domain> for TransportName {
    fn from(domain: &Domain) -> Self {
        match domain.form() {
            Form::Labels { labels, .. } => Self::Labels(PermissiveName(labels.clone())),
            Form::Literal(literal) => Self::Literal(*literal),
        }
    }
}

impl fmt::Display for StrictName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PermissiveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TransportName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Labels(name) => write!(f, "{name}"),
            Self::Literal(literal) => write!(f, "{literal}"),
        }
    }
}

impl FromStr for StrictName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromStr for PermissiveName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromStr for TransportName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{PermissiveName, StrictName, TransportName};

    macro_rules! string_serde {
        ($ty:ty) => {
            impl serde::Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.collect_str(self)
                }
            }

            impl<'de> serde::Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                    Self::parse(&s).map_err(serde::de::Error::custom)
                }
            }
        };
    }

    string_serde!(StrictName);
    string_serde!(PermissiveName);
    string_serde!(TransportName);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_domain_skips_revalidation() {
        let strict = StrictName::parse("www.example.com").unwrap();
        let domain = Domain::from(strict);
        assert_eq!(domain.tier(), Tier::Strict);
        assert_eq!(domain.name(), "www.example.com");
    }

    #[test]
    fn permissive_domain_upgrades_opportunistically() {
        let name = PermissiveName::parse("www.example.com").unwrap();
        assert!(Domain::from(name).is_strict());

        let name = PermissiveName::parse("4u.example.com").unwrap();
        let domain = Domain::from(name);
        assert_eq!(domain.tier(), Tier::Permissive);
    }

    #[test]
    fn tightening_permissive_fails_with_conversion() {
        let name = PermissiveName::parse("4u.example.com").unwrap();
        assert_eq!(
            StrictName::try_from(name),
            Err(DomainError::ConversionFailure {
                from: Tier::Permissive,
                to: "strict",
            })
        );
    }

    #[test]
    fn literal_is_transport_only() {
        let name = TransportName::parse("[IPv6:::1]").unwrap();
        assert!(name.labels().is_none());
        let domain = Domain::from(name.clone());
        assert!(domain.is_address_literal());
        assert_eq!(TransportName::from(&domain), name);
        assert!(PermissiveName::try_from(&domain).is_err());
        assert!(StrictName::try_from(&domain).is_err());
    }

    #[test]
    fn domain_views_match_tiers() {
        let domain = Domain::parse("example.com").unwrap();
        let strict = StrictName::try_from(&domain).unwrap();
        let permissive = PermissiveName::try_from(&domain).unwrap();
        assert_eq!(strict.labels(), permissive.labels());
        assert_eq!(Domain::from(TransportName::from(&domain)), domain);
    }

    #[test]
    fn display_matches_input() {
        assert_eq!(
            PermissiveName::parse("123.example.com").unwrap().to_string(),
            "123.example.com"
        );
        assert_eq!(
            TransportName::parse("[10.0.0.1]").unwrap().to_string(),
            "[10.0.0.1]"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let name = TransportName::parse("[10.0.0.1]").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"[10.0.0.1]\"");
        assert!(serde_json::from_str::<StrictName>("\"1.example.com\"").is_err());
    }
}
