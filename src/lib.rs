//! A domain name value type validated against three naming standards.
//!
//! # Overview
//!
//! A [`Domain`] is parsed once and remembers every tier it satisfies:
//!
//! | Tier         | Standard | Accepts                                         |
//! |--------------|----------|-------------------------------------------------|
//! | `Strict`     | RFC 1035 | labels starting with a letter                   |
//! | `Permissive` | RFC 1123 | labels starting with a letter or digit          |
//! | `Transport`  | RFC 5321 | permissive names and bracketed address literals |
//!
//! Hierarchy operations ([`Domain::parent`], [`Domain::root`],
//! [`Domain::adding_subdomain`], [`Domain::is_subdomain_of`]) work the same
//! at every tier and re-derive the tier of their result.
//!
//! # Quick Start
//!
//! ```rust
//! use tiered_domain::{Domain, Tier};
//!
//! let domain = Domain::parse("example.com").unwrap();
//! assert_eq!(domain.tier(), Tier::Strict);
//! assert_eq!(domain.tld().unwrap().as_str(), "com");
//!
//! // Leading digits are only allowed by RFC 1123
//! let domain = Domain::parse("123.example.com").unwrap();
//! assert!(domain.strict().is_none());
//!
//! // Address literals have no labels to navigate
//! let domain = Domain::parse("[192.168.1.1]").unwrap();
//! assert!(domain.adding_subdomain(["www"]).is_err());
//! ```
//!
//! # Internationalized Names
//!
//! ```rust
//! use tiered_domain::Domain;
//!
//! let domain = Domain::parse("café.com").unwrap();
//! let ascii = domain.to_ascii().unwrap();
//! assert_eq!(ascii.name(), "xn--caf-dma.com");
//! assert_eq!(ascii.to_unicode().unwrap().name(), "café.com");
//! ```
//!
//! # Custom Grammars
//!
//! Every tier is a pluggable [`LabelValidator`] or [`AddressLiteralParser`]
//! bundled in a [`Grammar`]. The convenience methods on [`Domain`] use
//! [`Grammar::STANDARD`].
//!
//! # Length Constraints
//!
//! | Component | Max Length |
//! |-----------|------------|
//! | Name      | 253 chars  |
//! | Label     | 63 chars   |

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod domain;
mod error;
mod grammar;
mod hierarchy;
mod idna;
#[cfg(kani)]
mod kani_impls;
mod label;
mod literal;
mod names;
pub mod prelude;
pub mod punycode;
mod sequence;
mod tier;
mod validator;

pub use constants::{ACE_PREFIX, LABEL_SEPARATOR, MAX_LABEL_LENGTH, MAX_NAME_LENGTH};
pub use domain::Domain;
pub use error::{
    DomainError, FormatError, IdnaError, IdnaErrorKind, LabelError, PunycodeError, SubdomainError,
};
pub use grammar::Grammar;
pub use label::Label;
pub use literal::{AddressLiteral, AddressLiteralParser, BracketedLiteral};
pub use names::{PermissiveName, StrictName, TransportName};
pub use sequence::LabelSequence;
pub use tier::Tier;
pub use validator::{LabelValidator, PermissiveLabels, StrictLabels};
