//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use tiered_domain::prelude::*;
//!
//! let domain = Domain::parse("www.example.com").unwrap();
//! assert_eq!(domain.tier(), Tier::Strict);
//! ```
//!
//! The Punycode codec is left out; reach it through `tiered_domain::punycode`.

pub use crate::{
    // Core types
    AddressLiteral, Domain, Label, LabelSequence, Tier,
    // Single-tier names
    PermissiveName, StrictName, TransportName,
    // Grammars
    AddressLiteralParser, BracketedLiteral, Grammar, LabelValidator, PermissiveLabels,
    StrictLabels,
    // Errors
    DomainError, FormatError, IdnaError, IdnaErrorKind, LabelError, PunycodeError, SubdomainError,
    // Constants
    ACE_PREFIX, LABEL_SEPARATOR, MAX_LABEL_LENGTH, MAX_NAME_LENGTH,
};
