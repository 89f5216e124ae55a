//! Address literals for the transport tier.
//!
//! # Grammar Reference
//!
//! ```abnf
//! address-literal = "[" ( IPv4-address-literal /
//!                         IPv6-address-literal ) "]"
//! IPv6-address-literal = "IPv6:" IPv6-addr
//! ```
//!
//! A bare bracketed IPv6 address (`[::1]`) is accepted as well.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// The RFC 5321 tag in front of IPv6 literals.
const IPV6_TAG: &str = "IPv6:";

/// A bracketed IP address used in place of a host name.
///
/// # Examples
///
/// ```
/// use std::net::Ipv4Addr;
/// use tiered_domain::{AddressLiteral, AddressLiteralParser, BracketedLiteral};
///
/// let lit = BracketedLiteral.parse_literal("[192.168.1.1]").unwrap();
/// assert_eq!(lit, AddressLiteral::V4(Ipv4Addr::new(192, 168, 1, 1)));
/// assert_eq!(lit.to_string(), "[192.168.1.1]");
///
/// let lit = BracketedLiteral.parse_literal("[::1]").unwrap();
/// assert_eq!(lit.to_string(), "[IPv6:::1]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressLiteral {
    /// An IPv4 address literal
    V4(Ipv4Addr),
    /// An IPv6 address literal
    V6(Ipv6Addr),
}

impl AddressLiteral {
    /// Returns the wrapped address.
    #[must_use]
    pub const fn ip(&self) -> IpAddr {
        match self {
            Self::V4(ip) => IpAddr::V4(*ip),
            Self::V6(ip) => IpAddr::V6(*ip),
        }
    }

    /// Returns true if the address is a loopback address.
    #[must_use]
    pub const fn is_loopback(&self) -> bool {
        match self {
            Self::V4(ip) => ip.is_loopback(),
            Self::V6(ip) => ip.is_loopback(),
        }
    }
}

impl From<IpAddr> for AddressLiteral {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(ip) => Self::V4(ip),
            IpAddr::V6(ip) => Self::V6(ip),
        }
    }
}

impl fmt::Display for AddressLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4(ip) => write!(f, "[{ip}]"),
            Self::V6(ip) => write!(f, "[{IPV6_TAG}{ip}]"),
        }
    }
}

/// Recognizes address literal forms.
pub trait AddressLiteralParser {
    /// Parses `input` as an address literal, or returns `None` if it is not
    /// one.
    fn parse_literal(&self, input: &str) -> Option<AddressLiteral>;
}

/// The standard bracketed IPv4/IPv6 literal parser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BracketedLiteral;

impl AddressLiteralParser for BracketedLiteral {
    fn parse_literal(&self, input: &str) -> Option<AddressLiteral> {
        let inner = input.strip_prefix('[')?.strip_suffix(']')?;

        let tagged = inner
            .get(..IPV6_TAG.len())
            .filter(|tag| tag.eq_ignore_ascii_case(IPV6_TAG));
        if tagged.is_some() {
            return inner[IPV6_TAG.len()..]
                .parse::<Ipv6Addr>()
                .ok()
                .map(AddressLiteral::V6);
        }

        if let Ok(ip) = inner.parse::<Ipv4Addr>() {
            return Some(AddressLiteral::V4(ip));
        }
        inner.parse::<Ipv6Addr>().ok().map(AddressLiteral::V6)
    }
}
