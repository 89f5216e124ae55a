//! Strictness tiers of domain name grammar.

use std::fmt;

/// A named strictness level of domain name grammar.
///
/// Tiers are ordered by permissiveness: `Strict < Permissive < Transport`.
/// A label-based name valid at one tier is valid at every tier above it.
/// Address literals exist only at [`Tier::Transport`].
///
/// # Examples
///
/// ```
/// use tiered_domain::Tier;
///
/// assert!(Tier::Strict < Tier::Permissive);
/// assert!(Tier::Permissive < Tier::Transport);
/// assert_eq!(Tier::Permissive.standard(), "RFC 1123");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// RFC 1035 preferred name syntax: labels start with a letter.
    Strict,
    /// RFC 1123 host names: labels may start with a digit.
    Permissive,
    /// RFC 5321 mail domains: host names or bracketed address literals.
    Transport,
}

impl Tier {
    /// All tiers, strictest first.
    pub const ALL: [Self; 3] = [Self::Strict, Self::Permissive, Self::Transport];

    /// Returns the lowercase tier name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
            Self::Transport => "transport",
        }
    }

    /// Returns the standard the tier's grammar comes from.
    #[must_use]
    pub const fn standard(self) -> &'static str {
        match self {
            Self::Strict => "RFC 1035",
            Self::Permissive => "RFC 1123",
            Self::Transport => "RFC 5321",
        }
    }

    /// Returns true if a name valid at `self` is also valid at `other`.
    #[must_use]
    pub fn implies(self, other: Self) -> bool {
        self <= other
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.standard())
    }
}
