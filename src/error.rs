//! Error types for domain name construction and navigation.

use std::fmt;

use crate::tier::Tier;

/// Errors for a single label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// Label is empty
    Empty,
    /// Label exceeds maximum length
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Invalid character (not a letter, digit or hyphen)
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the label
        position: usize,
    },
    /// Label starts with a hyphen
    LeadingHyphen,
    /// Label ends with a hyphen
    TrailingHyphen,
    /// Label must start with a letter
    MustStartWithLetter {
        /// The character found
        found: char,
    },
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "label cannot be empty"),
            Self::TooLong { max, actual } => {
                write!(f, "label length {actual} exceeds maximum {max}")
            }
            Self::InvalidChar { char, position } => {
                write!(
                    f,
                    "invalid character '{char}' at position {position}; only letters, digits, and hyphens allowed"
                )
            }
            Self::LeadingHyphen => write!(f, "label cannot start with a hyphen"),
            Self::TrailingHyphen => write!(f, "label cannot end with a hyphen"),
            Self::MustStartWithLetter { found } => {
                write!(f, "label must start with a letter, found '{found}'")
            }
        }
    }
}

impl std::error::Error for LabelError {}

/// Reasons a full name fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Name is empty
    Empty,
    /// Name exceeds maximum length
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// A label failed validation
    InvalidLabel {
        /// Index of the label, leftmost first
        index: usize,
        /// The invalid label
        label: String,
        /// Reason for invalidity
        error: LabelError,
    },
    /// Top-level label is all digits and would read as an IPv4 address
    NumericTld {
        /// The numeric label
        label: String,
    },
    /// Bracketed input is not a recognized address literal
    MalformedLiteral,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "name cannot be empty"),
            Self::TooLong { max, actual } => {
                write!(f, "name length {actual} exceeds maximum {max}")
            }
            Self::InvalidLabel {
                index,
                label,
                error,
            } => {
                write!(f, "invalid label '{label}' at index {index}: {error}")
            }
            Self::NumericTld { label } => {
                write!(f, "top-level label '{label}' cannot be all digits")
            }
            Self::MalformedLiteral => write!(
                f,
                "malformed address literal; expected [a.b.c.d] or [IPv6:address]"
            ),
        }
    }
}

impl std::error::Error for FormatError {}

/// Reasons a subdomain cannot be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubdomainError {
    /// Address literals have no label structure to extend
    AddressLiteral,
    /// No labels were supplied
    NoLabels,
    /// The extended name failed validation
    InvalidName(FormatError),
}

impl fmt::Display for SubdomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddressLiteral => write!(f, "address literals cannot have subdomains"),
            Self::NoLabels => write!(f, "at least one subdomain label is required"),
            Self::InvalidName(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SubdomainError {}

/// Errors produced by domain construction and hierarchy operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The input satisfies no tier and is not an address literal
    InvalidFormat {
        /// The rejected input
        input: String,
        /// Reason for invalidity
        reason: FormatError,
    },
    /// A subdomain could not be created
    CannotCreateSubdomain {
        /// The domain that was to be extended
        domain: String,
        /// Reason for failure
        reason: SubdomainError,
    },
    /// A tier conversion or hierarchy step failed
    ConversionFailure {
        /// Tier of the source value
        from: Tier,
        /// Target tier or operation
        to: &'static str,
    },
}

impl DomainError {
    pub(crate) fn invalid_format(input: impl Into<String>, reason: FormatError) -> Self {
        Self::InvalidFormat {
            input: input.into(),
            reason,
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat { input, reason } => {
                write!(f, "invalid domain '{input}': {reason}")
            }
            Self::CannotCreateSubdomain { domain, reason } => {
                write!(f, "cannot create subdomain of '{domain}': {reason}")
            }
            Self::ConversionFailure { from, to } => {
                write!(f, "cannot convert {from} value to {to}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// Errors from the Punycode codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunycodeError {
    /// Arithmetic overflow while encoding or decoding
    Overflow,
    /// A byte outside the base-36 digit alphabet
    InvalidDigit {
        /// The offending byte
        byte: u8,
    },
    /// A decoded value is not a Unicode scalar value
    InvalidCodePoint,
    /// The literal portion before the last delimiter is not ASCII
    NonBasic,
}

impl fmt::Display for PunycodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow => write!(f, "punycode arithmetic overflow"),
            Self::InvalidDigit { byte } => {
                write!(f, "invalid punycode digit 0x{byte:02x}")
            }
            Self::InvalidCodePoint => write!(f, "decoded value is not a valid code point"),
            Self::NonBasic => write!(f, "basic code points must be ASCII"),
        }
    }
}

impl std::error::Error for PunycodeError {}

/// Errors that can occur during IDNA transcoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdnaError {
    /// The name that failed to transcode
    pub input: String,
    /// The specific error that occurred
    pub kind: IdnaErrorKind,
}

/// Specific IDNA error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdnaErrorKind {
    /// A U-label could not be encoded
    Encode {
        /// The label that failed
        label: String,
        /// Codec error
        error: PunycodeError,
    },
    /// An A-label could not be decoded
    Decode {
        /// The label that failed
        label: String,
        /// Codec error
        error: PunycodeError,
    },
    /// The transcoded name is not a valid domain
    Rebuild(DomainError),
}

impl fmt::Display for IdnaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to transcode '{}': ", self.input)?;
        match &self.kind {
            IdnaErrorKind::Encode { label, error } => {
                write!(f, "cannot encode label '{label}': {error}")
            }
            IdnaErrorKind::Decode { label, error } => {
                write!(f, "cannot decode label '{label}': {error}")
            }
            IdnaErrorKind::Rebuild(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for IdnaError {}
