//! IDNA transcoding between U-labels and A-labels.
//!
//! Only the ASCII-compatible encoding step is performed: labels are not
//! mapped or normalized. Labels accept letters and digits only, so
//! decomposed text such as `cafe\u{301}` (a combining acute accent) is
//! rejected at construction; callers must compose it to `caf\u{e9}` first.
//! Decoding an A-label whose payload holds combining marks fails the same
//! way, with `IdnaErrorKind::Rebuild`.

use crate::constants::{ACE_PREFIX, LABEL_SEPARATOR};
use crate::domain::Domain;
use crate::error::{IdnaError, IdnaErrorKind};
use crate::grammar::Grammar;
use crate::literal::AddressLiteralParser;
use crate::punycode;
use crate::validator::LabelValidator;

impl<S, P, L> Grammar<S, P, L>
where
    S: LabelValidator,
    P: LabelValidator,
    L: AddressLiteralParser,
{
    /// Encodes every label of `domain` holding a non-ASCII character as an
    /// A-label and re-parses the result.
    ///
    /// # Errors
    ///
    /// Returns `IdnaError` if a label cannot be encoded or the encoded name
    /// is not a valid domain.
    pub fn to_ascii(&self, domain: &Domain) -> Result<Domain, IdnaError> {
        self.transcode(domain, |label| {
            if label.is_ascii() {
                return Ok(label.to_string());
            }
            punycode::encode(label)
                .map(|body| format!("{ACE_PREFIX}{body}"))
                .map_err(|error| IdnaErrorKind::Encode {
                    label: label.to_string(),
                    error,
                })
        })
    }

    /// Decodes every A-label of `domain` and re-parses the result.
    ///
    /// # Errors
    ///
    /// Returns `IdnaError` if a label cannot be decoded or the decoded name
    /// is not a valid domain.
    pub fn to_unicode(&self, domain: &Domain) -> Result<Domain, IdnaError> {
        self.transcode(domain, |label| match strip_ace_prefix(label) {
            Some(body) => punycode::decode(body).map_err(|error| IdnaErrorKind::Decode {
                label: label.to_string(),
                error,
            }),
            None => Ok(label.to_string()),
        })
    }

    fn transcode<F>(&self, domain: &Domain, mut convert: F) -> Result<Domain, IdnaError>
    where
        F: FnMut(&str) -> Result<String, IdnaErrorKind>,
    {
        let Some(labels) = domain.labels() else {
            return Ok(domain.clone());
        };

        let fail = |kind| IdnaError {
            input: domain.name().to_string(),
            kind,
        };

        let converted = labels
            .iter()
            .map(|label| convert(label.as_str()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(fail)?;
        let name = converted.join(&LABEL_SEPARATOR.to_string());
        tracing::trace!(from = domain.name(), to = %name, "transcoded");

        self.parse(&name)
            .map_err(|e| fail(IdnaErrorKind::Rebuild(e)))
    }
}

impl Domain {
    /// Returns true if the canonical name holds any non-ASCII character.
    #[must_use]
    pub fn is_internationalized(&self) -> bool {
        !self.name().is_ascii()
    }

    /// Returns true if any label starts with the `xn--` prefix.
    ///
    /// This is a syntactic check; the label may still fail to decode.
    #[must_use]
    pub fn has_a_labels(&self) -> bool {
        self.name()
            .split(LABEL_SEPARATOR)
            .any(|segment| strip_ace_prefix(segment).is_some())
    }
}

fn strip_ace_prefix(label: &str) -> Option<&str> {
    let prefix = label.get(..ACE_PREFIX.len())?;
    prefix
        .eq_ignore_ascii_case(ACE_PREFIX)
        .then(|| &label[ACE_PREFIX.len()..])
}
