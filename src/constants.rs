//! Constants for domain name validation.

/// Maximum length of a single label in characters.
pub const MAX_LABEL_LENGTH: usize = 63;

/// Maximum length of a full name in characters, separators included.
pub const MAX_NAME_LENGTH: usize = 253;

/// The ASCII-compatible encoding prefix carried by every A-label.
pub const ACE_PREFIX: &str = "xn--";

/// Label separator.
pub const LABEL_SEPARATOR: char = '.';
